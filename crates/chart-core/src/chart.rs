// File: crates/chart-core/src/chart.rs
// Summary: Top-level render entry point: range scan, scene composition in fixed paint order, rasterization.

use chrono::{DateTime, Local, TimeZone};

use crate::annotations::AnnotationPainter;
use crate::axis::AxisPainter;
use crate::config::ChartConfig;
use crate::grid::start_of_day_ms;
use crate::raster::{rasterize, ChartImage};
use crate::scale::CoordinateMapper;
use crate::scene::Scene;
use crate::series::{paint_sensor_line, LineStyle};
use crate::text::{FontTier, TextShaper};
use crate::theme::Theme;
use crate::treatment::Treatment;
use crate::types::{split_metered, DaySeries};
use crate::view::ViewState;

/// Output of one render: the image plus the x pixel of today's latest
/// reading (0 when today is empty or nothing was drawn).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedChart {
    pub image: ChartImage,
    pub current_value_x: i32,
}

impl RenderedChart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }
}

/// The display list of a chart before rasterization.
#[derive(Clone, Debug)]
pub struct ComposedChart {
    pub scene: Scene,
    pub view: ViewState,
    pub current_value_x: i32,
}

/// Stateless chart renderer. Holds only immutable configuration, so one
/// painter can serve concurrent renders; every call derives its own ranges.
#[derive(Clone, Debug)]
pub struct ChartPainter {
    config: ChartConfig,
    theme: Theme,
}

impl ChartPainter {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, theme: Theme::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render against the local clock and time zone.
    pub fn render(&self, days: &[DaySeries], treatments: &[Treatment]) -> RenderedChart {
        self.render_at(days, treatments, &Local::now())
    }

    /// Render with an explicit "now"; its time zone places the hour labels.
    pub fn render_at<Tz: TimeZone>(
        &self,
        days: &[DaySeries],
        treatments: &[Treatment],
        now: &DateTime<Tz>,
    ) -> RenderedChart
    where
        Tz::Offset: std::fmt::Display,
    {
        let Some(composed) = self.compose(days, treatments, now) else {
            return RenderedChart::empty();
        };
        let shaper = TextShaper::new();
        match rasterize(&composed.scene, self.config.width, self.config.height, self.theme.background, &shaper) {
            Some(image) => RenderedChart { image, current_value_x: composed.current_value_x },
            None => {
                tracing::warn!(
                    width = self.config.width,
                    height = self.config.height,
                    "could not acquire a raster surface, returning empty chart"
                );
                RenderedChart::empty()
            }
        }
    }

    /// Build the display list. None when there is nothing worth drawing:
    /// exactly one day, no day with at least two readings, or no plottable
    /// reading at all. Treatments before the local day of `now` are ignored.
    pub fn compose<Tz: TimeZone>(
        &self,
        days: &[DaySeries],
        treatments: &[Treatment],
        now: &DateTime<Tz>,
    ) -> Option<ComposedChart>
    where
        Tz::Offset: std::fmt::Display,
    {
        if days.len() == 1 {
            tracing::debug!("single day supplied, skipping chart");
            return None;
        }
        if !has_drawable_line(days) {
            tracing::debug!(days = days.len(), "no day has two readings, skipping chart");
            return None;
        }

        let cfg = &self.config;
        let now_ms = now.timestamp_millis() as f64;
        let view = ViewState::from_days(days, &cfg.bounds, now_ms);
        if !view.has_time_range() {
            tracing::debug!(days = days.len(), "no plottable reading, skipping chart");
            return None;
        }
        tracing::debug!(?view, "computed visible range");

        let day_start = start_of_day_ms(now);
        let todays: Vec<Treatment> = treatments.iter().filter(|t| t.timestamp >= day_start).cloned().collect();

        let mapper = CoordinateMapper::for_config(cfg, view);
        let fonts = FontTier::for_config(cfg);
        let mut scene = Scene::new(cfg.draw_labels);

        let axis = AxisPainter { mapper: &mapper, theme: &self.theme, config: cfg, fonts };
        axis.paint_band(&mut scene);
        axis.paint_hours(&mut scene, &now.timezone());
        axis.paint_value_labels(&mut scene);

        let annotations = AnnotationPainter { mapper: &mapper, theme: &self.theme, config: cfg, fonts };
        let mut current_value_x = 0;
        for (index, day) in days.iter().enumerate() {
            let day_number = index + 1;
            if day_number == 2 && !cfg.show_yesterday {
                continue;
            }
            let (sensor, metered) = split_metered(day);
            let style = LineStyle {
                day_number,
                color: self.theme.day_color(day_number, cfg.use_contrast_colors),
                ceiling: cfg.bounds.max_display_value,
                now_ms,
            };
            paint_sensor_line(&mut scene, &mapper, &self.theme, &sensor, style);

            if day_number == 1 {
                annotations.paint_metered(&mut scene, &metered, &sensor);
                let drawn = annotations.paint_treatments(&mut scene, &todays, &sensor);
                tracing::debug!(drawn, metered = metered.len(), "annotated today");
                if let Some(last) = day.last() {
                    current_value_x = mapper.map_x(last.timestamp) as i32;
                }
            }
        }

        if cfg.show_days_legend && cfg.show_yesterday {
            axis.paint_legend(&mut scene, days.len());
        }

        Some(ComposedChart { scene, view, current_value_x })
    }
}

/// At least one day has two or more readings to connect.
pub fn has_drawable_line(days: &[DaySeries]) -> bool {
    days.iter().any(|d| d.len() > 1)
}
