//! Run configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use glyphgrid_render::ImageFormat;
use serde::Deserialize;

use crate::layout::{CellResolution, GridLayout, GridShape};
use crate::{Error, Result};

/// Grid run configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Scalable font to rasterize
    pub font: PathBuf,

    /// Grid image output; format follows the extension
    pub image: PathBuf,

    /// Text dump output
    pub text: PathBuf,

    pub cell: CellResolution,

    pub grid: GridShape,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from("VT323-Regular.ttf"),
            image: PathBuf::from("ascii_bitmap_grid.png"),
            text: PathBuf::from("ascii_bitmaps.txt"),
            cell: CellResolution::default(),
            grid: GridShape::default(),
        }
    }
}

/// Per-field replacements, typically from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub font: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub text: Option<PathBuf>,
    pub cell: Option<CellResolution>,
    pub grid: Option<GridShape>,
}

impl GridConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply every override that is set
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(font) = overrides.font {
            self.font = font;
        }
        if let Some(image) = overrides.image {
            self.image = image;
        }
        if let Some(text) = overrides.text {
            self.text = text;
        }
        if let Some(cell) = overrides.cell {
            self.cell = cell;
        }
        if let Some(grid) = overrides.grid {
            self.grid = grid;
        }
        self
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.cell, self.grid)
    }

    /// Check everything that can be checked without touching the font
    pub fn validate(&self) -> Result<()> {
        self.layout().validate()?;
        if ImageFormat::from_path(&self.image) == ImageFormat::Unknown {
            return Err(Error::UnsupportedImageFormat(self.image.clone()));
        }
        Ok(())
    }
}
