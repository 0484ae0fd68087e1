// File: crates/chart-core/src/types.rs
// Summary: Shared input types and fixed layout constants.

/// Pixel rows reserved below the paintable area for the hour labels.
pub const LABEL_STRIP_HEIGHT: i32 = 30;
/// Distance from the canvas bottom where gridlines stop and hour labels start.
pub const HOUR_LABEL_OFFSET: i32 = 20;
/// Canvases below this height use the compact font tier.
pub const COMPACT_FONT_HEIGHT: i32 = 400;
/// Canvases below this height use the compact treatment stagger.
pub const COMPACT_OFFSET_HEIGHT: i32 = 500;

pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// One glucose observation.
///
/// `timestamp` is epoch milliseconds, `value` is mg/dL. Invalid readings are
/// sentinel/error values from the sensor; they never contribute to the
/// visible range and never terminate a line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub timestamp: f64,
    pub value: f64,
    pub is_metered: bool,
    pub is_valid: bool,
}

impl Reading {
    /// A valid continuous-sensor reading.
    pub const fn sensor(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value, is_metered: false, is_valid: true }
    }

    /// A valid manually entered (fingerstick) reading.
    pub const fn metered(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value, is_metered: true, is_valid: true }
    }

    /// A sensor reading flagged as an error value.
    pub const fn invalid(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value, is_metered: false, is_valid: false }
    }

    /// True when the reading lies strictly after `now_ms` (a forecast value).
    #[inline]
    pub fn is_predicted(&self, now_ms: f64) -> bool {
        self.timestamp > now_ms
    }

    /// Readings that may shape the axes: valid and numerically finite.
    #[inline]
    pub fn is_plottable(&self) -> bool {
        self.is_valid && self.timestamp.is_finite() && self.value.is_finite()
    }
}

/// Readings of one calendar day, ascending by timestamp.
/// Index 0 of a day list is today, index 1 yesterday, and so on.
pub type DaySeries = Vec<Reading>;

/// Sensor and metered readings of a day, each in input order.
pub fn split_metered(day: &[Reading]) -> (Vec<Reading>, Vec<Reading>) {
    day.iter().copied().partition(|r| !r.is_metered)
}
