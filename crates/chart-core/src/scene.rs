// File: crates/chart-core/src/scene.rs
// Summary: Backend-agnostic display list filled by the renderers and replayed by the rasterizer.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Axis-aligned box in canvas pixels, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 { self.y + self.height }
}

/// What a primitive represents, so tests and debug dumps can pick out parts
/// of the chart without matching on geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Band,
    HourGrid,
    HourLabel,
    ValueLabel,
    Series { day: usize },
    Predicted,
    Metered,
    Treatment,
    Legend,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { frame: Frame, color: skia::Color },
    Line { from: (f32, f32), to: (f32, f32), width: f32, color: skia::Color },
    Dot { center: (f32, f32), radius: f32, color: skia::Color },
    Triangle { points: [(f32, f32); 3], color: skia::Color },
    Text { text: String, frame: Frame, size: f32, align: TextAlign, color: skia::Color },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub layer: Layer,
    pub primitive: Primitive,
}

/// Ordered list of primitives; later items paint over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    items: Vec<Item>,
    draw_labels: bool,
}

impl Scene {
    pub fn new(draw_labels: bool) -> Self {
        Self { items: Vec::new(), draw_labels }
    }

    pub fn push(&mut self, layer: Layer, primitive: Primitive) {
        if !self.draw_labels && matches!(primitive, Primitive::Text { .. }) {
            return;
        }
        self.items.push(Item { layer, primitive });
    }

    pub fn text(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        frame: Frame,
        size: f32,
        align: TextAlign,
        color: skia::Color,
    ) {
        if !self.draw_labels {
            return;
        }
        self.push(layer, Primitive::Text { text: text.into(), frame, size, align, color });
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn in_layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.items.iter().filter(move |it| it.layer == layer).map(|it| &it.primitive)
    }

    /// Label strings in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|it| match &it.primitive {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
