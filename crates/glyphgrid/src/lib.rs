//! glyphgrid
//!
//! Renders the 256 single-byte characters of a scalable font into
//! fixed-size monochrome cells, tiles them into a grid image, and dumps each
//! cell as rows of `'1'`/`'0'`.
//!
//! # Example
//! ```rust,ignore
//! use glyphgrid::{generate, GridConfig};
//!
//! let config = GridConfig::default();
//! generate(&config, |artifact| println!("{artifact}"))?;
//! ```

mod config;
mod error;
mod grid;
pub mod dump;
pub mod layout;

pub use config::{GridConfig, Overrides};
pub use error::{Error, Result};
pub use grid::{generate, Artifact, GlyphBitmap, GlyphGrid, GridRasterizer};
pub use layout::{CellResolution, GridLayout, GridShape};

// Re-export sub-crates for custom renderers
pub use glyphgrid_render as render;
pub use glyphgrid_text as text;

/// Number of characters rendered per run, codes 0 through 255
pub const CHARACTER_COUNT: usize = 256;
