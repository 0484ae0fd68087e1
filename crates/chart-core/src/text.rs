// File: crates/chart-core/src/text.rs
// Summary: Font size tiers and a Skia textlayout shaper that draws labels into boxes.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::config::ChartConfig;
use crate::scene::{Frame, TextAlign};

pub const LEGEND_FONT_SIZE: f32 = 14.0;

/// Two discrete tiers: watch-sized canvases get smaller text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontTier {
    /// Axis, bound and treatment labels.
    pub chart: f32,
    /// Metered value labels.
    pub metered: f32,
}

impl FontTier {
    pub const COMPACT: FontTier = FontTier { chart: 10.0, metered: 12.0 };
    pub const REGULAR: FontTier = FontTier { chart: 14.0, metered: 18.0 };

    pub fn for_config(cfg: &ChartConfig) -> Self {
        if cfg.is_compact_font() { Self::COMPACT } else { Self::REGULAR }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_style(skia::FontStyle::bold());
        ts.set_font_families(&["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            TextAlign::Left => skia::textlayout::TextAlign::Left,
            TextAlign::Center => skia::textlayout::TextAlign::Center,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// Draw `text` with its first line's top at the frame's top edge,
    /// wrapped and aligned within the frame width.
    pub fn draw_in_frame(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        frame: Frame,
        size: f32,
        align: TextAlign,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color, align, frame.width);
        p.paint(canvas, (frame.x, frame.y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
