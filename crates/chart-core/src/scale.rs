// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-canvas transform with inverted Y and a reserved label strip.

use crate::config::ChartConfig;
use crate::view::ViewState;

/// Maps (timestamp, value) into canvas pixels for one render.
///
/// X grows to the right from the first visible timestamp; Y is mirrored so
/// that larger values sit higher, with `paintable_height` as the baseline.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    canvas_width: f64,
    paintable_height: f64,
    view: ViewState,
}

impl CoordinateMapper {
    pub fn new(canvas_width: i32, paintable_height: i32, view: ViewState) -> Self {
        Self { canvas_width: canvas_width as f64, paintable_height: paintable_height as f64, view }
    }

    pub fn for_config(cfg: &ChartConfig, view: ViewState) -> Self {
        Self::new(cfg.width, cfg.paintable_height(), view)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[inline]
    pub fn map_x(&self, timestamp: f64) -> f32 {
        let (origin, span) = guarded(self.view.x_min, self.view.x_max);
        (self.canvas_width / span * (timestamp - origin)) as f32
    }

    /// Whole-pixel row for `value`. Callers clamp data points to the display
    /// ceiling first; this function does not.
    #[inline]
    pub fn map_y(&self, value: f64) -> f32 {
        let (origin, span) = guarded(self.view.y_min, self.view.y_max);
        let stretched = (self.paintable_height / span * (value - origin))
            .clamp(i32::MIN as f64, i32::MAX as f64)
            .trunc();
        (self.paintable_height - stretched) as f32
    }

    /// `map_y` of `value` pinned to `ceiling`.
    #[inline]
    pub fn map_y_clamped(&self, value: f64, ceiling: f64) -> f32 {
        self.map_y(value.min(ceiling))
    }
}

/// Range origin and divisor; a zero or non-finite range divides by 1.
fn guarded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        let origin = if min.is_finite() { min } else { 0.0 };
        (origin, 1.0)
    } else {
        (min, span)
    }
}
