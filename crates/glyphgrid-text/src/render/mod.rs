//! Glyph rendering module

mod rasterizer;

pub use rasterizer::GlyphRasterizer;

/// Pixel-space ink extent of a glyph, relative to the text origin
///
/// The origin is the top-left corner of the ascender line, so `top` is
/// usually positive for lowercase letters and `left` is the left bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the glyph has no visible ink
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Axis-aligned pixel rectangle on a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A monochrome surface glyphs can be stamped onto
pub trait InkSurface {
    /// Mark the pixel at (x, y) as foreground
    ///
    /// Pixels outside the surface are ignored.
    fn put_ink(&mut self, x: u32, y: u32);
}

/// Measures and draws single characters with a loaded font
///
/// The font handle belongs to the implementor; one renderer instance is
/// one font at one pixel size.
pub trait GlyphRenderer {
    /// Ink bounding box of `ch` when drawn at the origin
    fn measure(&self, ch: char) -> BoundingBox;

    /// Draw `ch` with its text origin at `origin` (surface coordinates)
    ///
    /// Ink lands wherever the outline reaches, including neighbouring cells.
    fn draw(&self, ch: char, origin: (f32, f32), surface: &mut dyn InkSurface);
}
