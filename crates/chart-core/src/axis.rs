// File: crates/chart-core/src/axis.rs
// Summary: Good-range band, hour gridlines and labels, value-bound labels and the day legend.

use chrono::TimeZone;

use crate::config::ChartConfig;
use crate::grid::{hour_label, hour_ticks, HourStep};
use crate::scale::CoordinateMapper;
use crate::scene::{Frame, Layer, Primitive, Scene, TextAlign};
use crate::text::{FontTier, LEGEND_FONT_SIZE};
use crate::theme::Theme;
use crate::types::HOUR_LABEL_OFFSET;

/// Spans longer than this get a label every second hour on narrow canvases.
pub const DENSE_SPAN_HOURS: f64 = 6.0;
/// Canvases at least this wide always label every hour.
pub const WIDE_CANVAS: i32 = 1920;
/// Horizontal period at which the value labels repeat.
pub const VALUE_LABEL_REPEAT: i32 = 200;
/// Maximum label only shows when it clears the upper bound by more than this.
pub const MAX_LABEL_CLEARANCE: f64 = 25.0;
pub const LEGEND_NAMES: [&str; 5] = ["D1", "D2", "D3", "D4", "D5"];

pub struct AxisPainter<'a> {
    pub mapper: &'a CoordinateMapper,
    pub theme: &'a Theme,
    pub config: &'a ChartConfig,
    pub fonts: FontTier,
}

impl AxisPainter<'_> {
    /// Filled band between the nice bounds, across the whole width.
    pub fn paint_band(&self, scene: &mut Scene) {
        let top = self.mapper.map_y(self.config.bounds.nice_upper);
        let bottom = self.mapper.map_y(self.config.bounds.nice_lower);
        scene.push(
            Layer::Band,
            Primitive::Rect {
                frame: Frame::new(0.0, top, self.config.width as f32, bottom - top),
                color: self.theme.band,
            },
        );
    }

    pub fn hour_step(&self) -> HourStep {
        if self.mapper.view().spans_more_than_hours(DENSE_SPAN_HOURS) && self.config.width < WIDE_CANVAS {
            HourStep::EverySecond
        } else {
            HourStep::Every
        }
    }

    /// Vertical gridline plus a centered time label for each labeled hour.
    pub fn paint_hours<Tz: TimeZone>(&self, scene: &mut Scene, tz: &Tz)
    where
        Tz::Offset: std::fmt::Display,
    {
        let view = self.mapper.view();
        let grid_bottom = (self.config.height - HOUR_LABEL_OFFSET) as f32;
        for ts in hour_ticks(tz, view.x_min, view.x_max, self.hour_step()) {
            let x = self.mapper.map_x(ts);
            scene.text(
                Layer::HourLabel,
                hour_label(tz, ts),
                Frame::new(x - 25.0, grid_bottom, 50.0, 14.0),
                self.fonts.chart,
                TextAlign::Center,
                self.theme.axis_label,
            );
            scene.push(
                Layer::HourGrid,
                Primitive::Line { from: (x, 0.0), to: (x, grid_bottom), width: 1.0, color: self.theme.gridline },
            );
        }
    }

    /// Upper/lower bound labels (and the maximum, when there is room),
    /// tiled every 200 px across the canvas.
    pub fn paint_value_labels(&self, scene: &mut Scene) {
        let bounds = &self.config.bounds;
        let units = self.config.units;
        let max_value = self.mapper.view().y_max;
        let show_max = max_value > bounds.nice_upper + MAX_LABEL_CLEARANCE;

        let mut x = 5;
        while x < self.config.width {
            let xf = x as f32;
            if show_max {
                self.value_label(scene, units.format(max_value), xf, self.mapper.map_y(max_value) + 3.0);
            }
            self.value_label(scene, units.format(bounds.nice_upper), xf, self.mapper.map_y(bounds.nice_upper));
            self.value_label(scene, units.format(bounds.nice_lower), xf, self.mapper.map_y(bounds.nice_lower) - 15.0);
            x += VALUE_LABEL_REPEAT;
        }
    }

    fn value_label(&self, scene: &mut Scene, text: String, x: f32, y: f32) {
        scene.text(
            Layer::ValueLabel,
            text,
            Frame::new(x, y, 40.0, 14.0),
            self.fonts.chart,
            TextAlign::Left,
            self.theme.axis_label,
        );
    }

    /// "D1".."Dn" in the day colors, packed against the right edge.
    pub fn paint_legend(&self, scene: &mut Scene, day_count: usize) {
        let n = day_count.min(LEGEND_NAMES.len());
        let left = self.config.width - 22 * n as i32;
        for (i, name) in LEGEND_NAMES.iter().take(n).enumerate() {
            let day_number = i + 1;
            let x = left + day_number as i32 * 20 - 20;
            scene.text(
                Layer::Legend,
                *name,
                Frame::new(x as f32, 20.0, 20.0, 14.0),
                LEGEND_FONT_SIZE,
                TextAlign::Center,
                self.theme.day_color(day_number, self.config.use_contrast_colors),
            );
        }
    }
}
