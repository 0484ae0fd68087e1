// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges derived from the day series for a single render.

use crate::config::ValueBounds;
use crate::types::{DaySeries, MS_PER_HOUR};

/// Data-space extent of one render. Recomputed on every call, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Scan all days for the visible time and value range.
    ///
    /// The value range starts out as the good-range band (upper end clamped to
    /// the display maximum) and only ever widens. Invalid readings are ignored,
    /// and so are today's predicted readings (`timestamp > now_ms`), which are
    /// still drawn but must not stretch the axes.
    pub fn from_days(days: &[DaySeries], bounds: &ValueBounds, now_ms: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = bounds.nice_lower;
        let mut y_max = bounds.nice_upper.min(bounds.max_display_value);

        for (day_index, day) in days.iter().enumerate() {
            for r in day {
                if !r.is_plottable() {
                    continue;
                }
                if day_index == 0 && r.is_predicted(now_ms) {
                    continue;
                }
                if r.value < y_min {
                    y_min = r.value;
                }
                if r.value > y_max {
                    y_max = r.value.min(bounds.max_display_value);
                }
                x_min = x_min.min(r.timestamp);
                x_max = x_max.max(r.timestamp);
            }
        }

        Self { x_min, x_max, y_min, y_max }
    }

    /// False when no reading contributed to the time range.
    pub fn has_time_range(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite()
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Beyond six hours the hour grid thins out to every second hour.
    pub fn spans_more_than_hours(&self, hours: f64) -> bool {
        self.x_span() > hours * MS_PER_HOUR
    }
}
