// File: crates/chart-core/src/raster.rs
// Summary: Replays a Scene onto a Skia CPU raster surface and holds the resulting RGBA pixels.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::scene::{Primitive, Scene};
use crate::text::TextShaper;

/// Rendered chart pixels, RGBA8 unpremultiplied, row-major without padding.
/// The zero-size image is the placeholder returned when nothing was drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ChartImage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn stride(&self) -> usize { self.width as usize * 4 }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at (x, y), or None outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = self.as_rgba_image()?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
        Ok(out)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let img = self.as_rgba_image()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| ChartError::Io { path: parent.to_path_buf(), source })?;
        }
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn as_rgba_image(&self) -> Result<image::RgbaImage> {
        if self.is_empty() {
            return Err(ChartError::EmptyImage);
        }
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(ChartError::EmptyImage)
    }
}

/// Paint `scene` onto a fresh `width`x`height` surface. Returns None when the
/// surface cannot be created or read back.
pub fn rasterize(
    scene: &Scene,
    width: i32,
    height: i32,
    background: skia::Color,
    shaper: &TextShaper,
) -> Option<ChartImage> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let mut surface = skia::surfaces::raster_n32_premul((width, height))?;
    let canvas = surface.canvas();
    canvas.clear(background);

    for item in scene.items() {
        draw_primitive(canvas, &item.primitive, shaper);
    }

    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return None;
    }
    Some(ChartImage { width: width as u32, height: height as u32, pixels })
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_primitive(canvas: &skia::Canvas, primitive: &Primitive, shaper: &TextShaper) {
    match primitive {
        Primitive::Rect { frame, color } => {
            let mut paint = fill(*color);
            paint.set_anti_alias(false);
            canvas.draw_rect(skia::Rect::from_xywh(frame.x, frame.y, frame.width, frame.height), &paint);
        }
        Primitive::Line { from, to, width, color } => {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(*width);
            stroke.set_color(*color);
            canvas.draw_line(*from, *to, &stroke);
        }
        Primitive::Dot { center, radius, color } => {
            canvas.draw_circle(*center, *radius, &fill(*color));
        }
        Primitive::Triangle { points, color } => {
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            path.line_to(points[1]);
            path.line_to(points[2]);
            path.close();
            canvas.draw_path(&path, &fill(*color));
        }
        Primitive::Text { text, frame, size, align, color } => {
            shaper.draw_in_frame(canvas, text, *frame, *size, *align, *color);
        }
    }
}
