//! Glyph rasterization

use std::path::Path;

use ttf_parser::OutlineBuilder;

use super::{BoundingBox, GlyphRenderer, InkSurface};
use crate::{FontFace, Result, TextError};

/// Minimum coverage for a pixel to count as ink
const INK_THRESHOLD: u8 = 128;

/// Monochrome glyph rasterizer using tiny-skia
///
/// Holds one font face scaled so that one em spans `pixel_size` pixels.
#[derive(Debug, Clone)]
pub struct GlyphRasterizer {
    font: FontFace,
    pixel_size: f32,
}

impl GlyphRasterizer {
    /// Create a new rasterizer for `font` at `pixel_size` pixels per em
    pub fn new(font: FontFace, pixel_size: f32) -> Result<Self> {
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(TextError::InvalidSize(pixel_size));
        }
        Ok(Self { font, pixel_size })
    }

    /// Load a font file and create a rasterizer for it
    pub fn from_file(path: impl AsRef<Path>, pixel_size: f32) -> Result<Self> {
        Self::new(FontFace::from_file(path)?, pixel_size)
    }

    /// Font units to pixels
    fn scale(&self) -> f32 {
        self.pixel_size / self.font.units_per_em() as f32
    }

    /// Distance in pixels from the text origin down to the baseline
    fn baseline(&self) -> f32 {
        self.font.ascender() as f32 * self.scale()
    }
}

impl GlyphRenderer for GlyphRasterizer {
    fn measure(&self, ch: char) -> BoundingBox {
        let Some(face) = self.font.ttf_face() else {
            return BoundingBox::default();
        };
        let Some(glyph) = face.glyph_index(ch) else {
            return BoundingBox::default();
        };
        let Some(bbox) = face.glyph_bounding_box(glyph) else {
            return BoundingBox::default();
        };

        let scale = self.scale();
        let ascender = self.font.ascender() as f32;
        BoundingBox {
            left: (bbox.x_min as f32 * scale).floor() as i32,
            top: ((ascender - bbox.y_max as f32) * scale).floor() as i32,
            right: (bbox.x_max as f32 * scale).ceil() as i32,
            bottom: ((ascender - bbox.y_min as f32) * scale).ceil() as i32,
        }
    }

    fn draw(&self, ch: char, origin: (f32, f32), surface: &mut dyn InkSurface) {
        let bbox = self.measure(ch);
        if bbox.is_empty() {
            return;
        }
        let Some(face) = self.font.ttf_face() else {
            return;
        };
        let Some(glyph) = face.glyph_index(ch) else {
            return;
        };

        // Pixel-aligned box holding the ink at this origin
        let x0 = (origin.0 + bbox.left as f32).floor();
        let y0 = (origin.1 + bbox.top as f32).floor();
        let width = ((origin.0 + bbox.right as f32).ceil() - x0) as u32;
        let height = ((origin.1 + bbox.bottom as f32).ceil() - y0) as u32;

        let mut builder = PathBuilder::new(
            self.scale(),
            origin.0 - x0,
            origin.1 - y0 + self.baseline(),
        );
        if face.outline_glyph(glyph, &mut builder).is_none() {
            return;
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let Some(mut pixmap) = tiny_skia::Pixmap::new(width, height) else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = false;

        pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );

        let (x0, y0) = (x0 as i64, y0 as i64);
        let stride = width as usize;
        for (i, pixel) in pixmap.pixels().iter().enumerate() {
            if pixel.alpha() < INK_THRESHOLD {
                continue;
            }
            let x = x0 + (i % stride) as i64;
            let y = y0 + (i / stride) as i64;
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                surface.put_ink(x, y);
            }
        }
    }
}

/// Path builder that converts ttf-parser outlines to tiny-skia paths
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl PathBuilder {
    fn new(scale: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            offset_x,
            offset_y,
        }
    }

    fn transform_x(&self, x: f32) -> f32 {
        self.offset_x + x * self.scale
    }

    fn transform_y(&self, y: f32) -> f32 {
        self.offset_y - y * self.scale // Flip Y axis
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.transform_x(x), self.transform_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.transform_x(x), self.transform_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x2), self.transform_y(y2),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
