// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (canvas size, value bounds, display flags) with TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{COMPACT_FONT_HEIGHT, COMPACT_OFFSET_HEIGHT, LABEL_STRIP_HEIGHT};
use crate::units::DisplayUnits;

/// Value thresholds, all in mg/dL.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueBounds {
    /// Values above this are drawn pinned to the chart ceiling.
    pub max_display_value: f64,
    /// Top of the good-range band.
    pub nice_upper: f64,
    /// Bottom of the good-range band.
    pub nice_lower: f64,
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self { max_display_value: 350.0, nice_upper: 180.0, nice_lower: 80.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub bounds: ValueBounds,
    pub show_days_legend: bool,
    pub show_yesterday: bool,
    pub use_contrast_colors: bool,
    pub units: DisplayUnits,
    /// Disable to get text-free output (deterministic across font setups).
    pub draw_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::watch()
    }
}

impl ChartConfig {
    /// Watch-sized canvas; legend off since there is no room for it.
    pub fn watch() -> Self {
        Self {
            width: 165,
            height: 125,
            bounds: ValueBounds::default(),
            show_days_legend: false,
            show_yesterday: true,
            use_contrast_colors: false,
            units: DisplayUnits::MgDl,
            draw_labels: true,
        }
    }

    pub fn phone() -> Self {
        Self { width: 350, height: 150, show_days_legend: true, ..Self::watch() }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bounds(mut self, max_display_value: f64, nice_upper: f64, nice_lower: f64) -> Self {
        self.bounds = ValueBounds { max_display_value, nice_upper, nice_lower };
        self
    }

    /// Height available to the data lines; the label strip sits below it.
    pub fn paintable_height(&self) -> i32 {
        self.height - LABEL_STRIP_HEIGHT
    }

    /// Font tier: watch-sized canvases use smaller text.
    pub fn is_compact_font(&self) -> bool {
        self.height < COMPACT_FONT_HEIGHT
    }

    /// Offset tier for staggered treatment labels.
    pub fn is_compact_offsets(&self) -> bool {
        self.height < COMPACT_OFFSET_HEIGHT
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= LABEL_STRIP_HEIGHT {
            return Err(ChartError::InvalidCanvas { width: self.width, height: self.height });
        }
        if self.bounds.nice_lower >= self.bounds.nice_upper {
            return Err(ChartError::InvertedBounds {
                lower: self.bounds.nice_lower,
                upper: self.bounds.nice_upper,
            });
        }
        Ok(())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: ChartConfig = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), width = cfg.width, height = cfg.height, "loaded chart config");
        Ok(cfg)
    }
}
