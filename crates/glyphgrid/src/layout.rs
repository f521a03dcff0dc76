//! Grid geometry
//!
//! Cells tile the canvas in row-major order of character code, so code `n`
//! sits in column `n % columns`, row `n / columns`.

use std::fmt;
use std::str::FromStr;

use glyphgrid_render::PixelRect;
use serde::Deserialize;

use crate::{CHARACTER_COUNT, Error, Result};

/// Size of one character cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellResolution {
    pub width: u32,
    pub height: u32,
}

impl Default for CellResolution {
    fn default() -> Self {
        Self { width: 64, height: 64 }
    }
}

/// Number of cells across and down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridShape {
    fn default() -> Self {
        Self { columns: 16, rows: 16 }
    }
}

/// Error parsing a `AxB` pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected two integers separated by 'x', got {0:?}")]
pub struct ParsePairError(String);

fn parse_pair(s: &str) -> std::result::Result<(u32, u32), ParsePairError> {
    let err = || ParsePairError(s.to_string());
    let (a, b) = s.split_once(['x', 'X']).ok_or_else(err)?;
    let a = a.trim().parse().map_err(|_| err())?;
    let b = b.trim().parse().map_err(|_| err())?;
    Ok((a, b))
}

impl FromStr for CellResolution {
    type Err = ParsePairError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (width, height) = parse_pair(s)?;
        Ok(Self { width, height })
    }
}

impl FromStr for GridShape {
    type Err = ParsePairError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (columns, rows) = parse_pair(s)?;
        Ok(Self { columns, rows })
    }
}

impl fmt::Display for CellResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Cell resolution plus grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    pub cell: CellResolution,
    pub shape: GridShape,
}

impl GridLayout {
    pub fn new(cell: CellResolution, shape: GridShape) -> Self {
        Self { cell, shape }
    }

    /// Number of cells in the grid
    pub fn capacity(&self) -> u64 {
        self.shape.columns as u64 * self.shape.rows as u64
    }

    /// Reject layouts that cannot hold every single-byte character
    pub fn validate(&self) -> Result<()> {
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(Error::InvalidCell {
                width: self.cell.width,
                height: self.cell.height,
            });
        }
        if self.capacity() < CHARACTER_COUNT as u64 {
            return Err(Error::GridTooSmall {
                columns: self.shape.columns,
                rows: self.shape.rows,
            });
        }
        self.canvas_size().map(|_| ())
    }

    /// Canvas dimensions in pixels
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        let width = self.cell.width as u64 * self.shape.columns as u64;
        let height = self.cell.height as u64 * self.shape.rows as u64;
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if usize::try_from(width * height).is_ok() => Ok((w, h)),
            _ => Err(Error::CanvasTooLarge { width, height }),
        }
    }

    /// Cell rectangle reserved for `code`
    pub fn cell_rect(&self, code: u8) -> PixelRect {
        let code = code as u32;
        PixelRect::new(
            (code % self.shape.columns) * self.cell.width,
            (code / self.shape.columns) * self.cell.height,
            self.cell.width,
            self.cell.height,
        )
    }
}
