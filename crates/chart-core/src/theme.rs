// File: crates/chart-core/src/theme.rs
// Summary: Fixed chart colors and the two per-day palettes.

use skia_safe as skia;

/// Default palette, day 1 (today). Segments in exactly this color get the
/// ceiling alarm recolor and predicted-point markers.
pub const DEFAULT_DAY1: skia::Color = skia::Color::new(0xFF_4C_D9_64);
pub const LIGHT_GRAY: skia::Color = skia::Color::new(0x80_FF_FF_FF);
pub const YELLOW: skia::Color = skia::Color::new(0xFF_FF_CC_00);
pub const ALARM_RED: skia::Color = skia::Color::new(0xFF_FF_3B_30);
pub const ORANGE: skia::Color = skia::Color::new(0xFF_FF_95_00);

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    /// Good-range band fill.
    pub band: skia::Color,
    pub gridline: skia::Color,
    pub axis_label: skia::Color,
    pub alarm: skia::Color,
    pub predicted: skia::Color,
    pub marker: skia::Color,
    pub metered_label: skia::Color,
    pub treatment_label: skia::Color,
    pub correction_glyph: skia::Color,
    pub default_days: [skia::Color; 5],
    pub contrast_days: [skia::Color; 5],
}

impl Theme {
    pub fn night() -> Self {
        Self {
            background: skia::Color::from_argb(255, 0, 0, 0),
            band: skia::Color::from_argb(255, 26, 26, 26),
            gridline: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 128, 128, 128),
            alarm: ALARM_RED,
            predicted: skia::Color::from_argb(255, 128, 0, 128),
            marker: skia::Color::from_argb(255, 128, 128, 128),
            metered_label: YELLOW,
            treatment_label: skia::Color::from_argb(255, 255, 255, 255),
            correction_glyph: YELLOW,
            default_days: [DEFAULT_DAY1, LIGHT_GRAY, YELLOW, ALARM_RED, ORANGE],
            contrast_days: [
                skia::Color::from_argb(255, 0x00, 0xE6, 0x76), // bright green
                skia::Color::from_argb(255, 0xFF, 0xFF, 0xFF),
                skia::Color::from_argb(255, 0x29, 0x79, 0xFF), // blue
                skia::Color::from_argb(255, 0xFF, 0x40, 0x81), // pink
                skia::Color::from_argb(255, 0xFF, 0xEA, 0x00),
            ],
        }
    }

    /// Color of day `day_number` (1 = today). Numbers outside 1..=5 fall back
    /// to day 1.
    pub fn day_color(&self, day_number: usize, use_contrast: bool) -> skia::Color {
        let palette = if use_contrast { &self.contrast_days } else { &self.default_days };
        match day_number {
            2..=5 => palette[day_number - 1],
            _ => palette[0],
        }
    }

    /// Accent for a predicted point at the given opacity.
    pub fn predicted_at(&self, opacity: f32) -> skia::Color {
        with_opacity(self.predicted, opacity)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

pub fn with_opacity(color: skia::Color, opacity: f32) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    color.with_a(a)
}
