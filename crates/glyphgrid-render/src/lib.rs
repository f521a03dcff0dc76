//! glyphgrid Render - Monochrome Canvas
//!
//! The 1-bit drawing surface glyphs are stamped onto, cell cropping, and
//! encoding of the finished canvas to an image file.

mod canvas;
mod encoder;

pub use canvas::{BitmapRecord, Canvas};
pub use encoder::{ImageEncoder, ImageFormat};
pub use glyphgrid_text::PixelRect;

use std::path::PathBuf;

/// Glyph ink (black)
pub const FOREGROUND: u8 = 0;

/// Empty pixel (white)
pub const BACKGROUND: u8 = 1;

/// Render error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Crop {rect:?} lies outside the {width}x{height} canvas")]
    CropOutOfBounds {
        rect: PixelRect,
        width: u32,
        height: u32,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
