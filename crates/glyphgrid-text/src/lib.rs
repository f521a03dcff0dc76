//! glyphgrid Text - Font Loading and Glyph Rasterization
//!
//! This crate provides the font side of glyphgrid:
//! - Font loading from disk or memory (ttf-parser)
//! - Glyph measurement in pixel space
//! - Monochrome glyph rasterization (tiny-skia)

pub mod font;
pub mod render;

pub use font::FontFace;
pub use render::{BoundingBox, GlyphRasterizer, GlyphRenderer, InkSurface, PixelRect};

use std::path::PathBuf;

/// Text rendering error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {}", .0.display())]
    FontNotFound(PathBuf),

    #[error("Failed to read font {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Invalid font size: {0}")]
    InvalidSize(f32),
}

pub type Result<T> = std::result::Result<T, TextError>;
