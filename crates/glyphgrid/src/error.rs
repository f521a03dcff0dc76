//! Error types

use std::path::PathBuf;

use glyphgrid_render::RenderError;
use glyphgrid_text::TextError;

/// Errors that abort a grid run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load font")]
    FontLoad(#[source] TextError),

    #[error("Failed to write bitmap grid image")]
    ImageWrite(#[source] RenderError),

    #[error("Failed to write bitmap strings to {}", path.display())]
    TextWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Grid of {columns}x{rows} cells cannot hold 256 characters")]
    GridTooSmall { columns: u32, rows: u32 },

    #[error("Invalid cell size {width}x{height}")]
    InvalidCell { width: u32, height: u32 },

    #[error("Canvas of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedImageFormat(PathBuf),

    #[error("Canvas operation failed")]
    Canvas(#[source] RenderError),

    #[error("Failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
