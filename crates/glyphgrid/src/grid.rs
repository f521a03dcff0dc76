//! Grid rasterization
//!
//! Draws every single-byte character into its cell on a shared 1-bit canvas
//! and crops each cell back out as a bitmap record.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use glyphgrid_render::{BitmapRecord, Canvas, ImageEncoder};
use glyphgrid_text::{GlyphRasterizer, GlyphRenderer};

use crate::dump;
use crate::layout::GridLayout;
use crate::{CHARACTER_COUNT, Error, Result};

/// One rasterized character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub code: u8,
    pub record: BitmapRecord,
}

impl GlyphBitmap {
    /// Text dump block for this character
    pub fn to_block(&self) -> String {
        dump::format_block(self.code, &self.record)
    }
}

/// Finished canvas plus the per-character records, in code order
#[derive(Debug, Clone)]
pub struct GlyphGrid {
    canvas: Canvas,
    glyphs: Vec<GlyphBitmap>,
}

impl GlyphGrid {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn glyphs(&self) -> &[GlyphBitmap] {
        &self.glyphs
    }

    /// Record for `code`
    pub fn glyph(&self, code: u8) -> &GlyphBitmap {
        &self.glyphs[code as usize]
    }

    /// All blocks concatenated in ascending code order
    pub fn text_dump(&self) -> String {
        self.glyphs.iter().map(GlyphBitmap::to_block).collect()
    }

    /// Encode the canvas to `path`
    pub fn write_image(&self, path: &Path) -> Result<()> {
        ImageEncoder::save(&self.canvas, path).map_err(Error::ImageWrite)?;
        tracing::info!(path = %path.display(), "wrote bitmap grid");
        Ok(())
    }

    /// Write the text dump to `path`
    pub fn write_text(&self, path: &Path) -> Result<()> {
        fs::write(path, self.text_dump()).map_err(|source| Error::TextWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote bitmap strings");
        Ok(())
    }
}

/// Lays out and draws the 256 single-byte characters of one font
pub struct GridRasterizer<R> {
    renderer: R,
    layout: GridLayout,
}

impl GridRasterizer<GlyphRasterizer> {
    /// Load `path` at one em per cell height
    pub fn from_font_file(path: &Path, layout: GridLayout) -> Result<Self> {
        layout.validate()?;
        let renderer = GlyphRasterizer::from_file(path, layout.cell.height as f32)
            .map_err(Error::FontLoad)?;
        tracing::info!(
            font = %path.display(),
            pixel_size = layout.cell.height,
            "loaded font"
        );
        Ok(Self { renderer, layout })
    }
}

impl<R: GlyphRenderer> GridRasterizer<R> {
    pub fn new(renderer: R, layout: GridLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { renderer, layout })
    }

    /// Draw every character and collect its record
    ///
    /// Each cell is cropped right after its character is drawn, so ink that
    /// spills into a later cell shows up in that cell's record as well.
    pub fn rasterize(&self) -> Result<GlyphGrid> {
        let (width, height) = self.layout.canvas_size()?;
        tracing::debug!(
            width,
            height,
            cell = %self.layout.cell,
            grid = %self.layout.shape,
            "allocated canvas"
        );

        let mut canvas = Canvas::new(width, height);
        let mut glyphs = Vec::with_capacity(CHARACTER_COUNT);

        for code in 0..=u8::MAX {
            let ch = char::from(code);
            let cell = self.layout.cell_rect(code);

            let bbox = self.renderer.measure(ch);
            let origin = (
                cell.x as f32 + (cell.width as f32 - bbox.width() as f32) / 2.0,
                cell.y as f32 + (cell.height as f32 - bbox.height() as f32) / 2.0,
            );
            self.renderer.draw(ch, origin, &mut canvas);

            let record = canvas.crop(cell).map_err(Error::Canvas)?;
            tracing::trace!(code, ink = record.ink_count(), "rasterized glyph");
            glyphs.push(GlyphBitmap { code, record });
        }

        Ok(GlyphGrid { canvas, glyphs })
    }
}

/// An artifact written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Image(PathBuf),
    Text(PathBuf),
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Image(path) => write!(f, "Bitmap grid saved as {}", path.display()),
            Artifact::Text(path) => write!(f, "Bitmap strings saved as {}", path.display()),
        }
    }
}

/// Run the whole conversion described by `config`
///
/// The image is written before the text dump; `report` is called after
/// each one lands. A text write failure therefore leaves the image behind.
pub fn generate(config: &crate::GridConfig, mut report: impl FnMut(&Artifact)) -> Result<GlyphGrid> {
    config.validate()?;

    let rasterizer = GridRasterizer::from_font_file(&config.font, config.layout())?;
    let grid = rasterizer.rasterize()?;

    grid.write_image(&config.image)?;
    report(&Artifact::Image(config.image.clone()));

    grid.write_text(&config.text)?;
    report(&Artifact::Text(config.text.clone()));

    Ok(grid)
}
