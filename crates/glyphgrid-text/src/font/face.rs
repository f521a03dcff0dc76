//! Font face with parsed metrics

use std::fs;
use std::io;
use std::path::Path;

use ttf_parser::Face;

use crate::{Result, TextError};

/// An owned, validated font face
///
/// The raw font bytes are kept alongside the metrics read at load time.
/// `ttf_parser::Face` borrows its data, so a fresh view is parsed on demand
/// through [`FontFace::ttf_face`].
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: u16,
    ascender: i16,
}

impl FontFace {
    /// Load the first face of a font file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => TextError::FontNotFound(path.to_path_buf()),
            _ => TextError::FontRead { path: path.to_path_buf(), source },
        })?;

        let face = Self::from_data(data, 0)?;
        tracing::debug!(
            path = %path.display(),
            units_per_em = face.units_per_em,
            "loaded font face"
        );
        Ok(face)
    }

    /// Parse a font face from data
    pub fn from_data(data: Vec<u8>, index: u32) -> Result<Self> {
        let (units_per_em, ascender) = {
            let face = Face::parse(&data, index)
                .map_err(|e| TextError::FontParsing(e.to_string()))?;
            (face.units_per_em(), face.ascender())
        };

        Ok(Self {
            data,
            index,
            units_per_em,
            ascender,
        })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Parse a borrowed ttf-parser view of the face
    ///
    /// Never fails for a face built through `from_data`, since the same
    /// bytes were validated there.
    pub fn ttf_face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, self.index).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::synthetic::SyntheticFont;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = FontFace::from_file("/nonexistent/glyphgrid/font.ttf").unwrap_err();
        assert!(matches!(err, TextError::FontNotFound(_)));
    }

    #[test]
    fn test_garbage_data_fails_to_parse() {
        let err = FontFace::from_data(b"definitely not a font".to_vec(), 0).unwrap_err();
        assert!(matches!(err, TextError::FontParsing(_)));
    }

    #[test]
    fn test_synthetic_metrics() {
        let face = FontFace::from_data(SyntheticFont::new().build(), 0).unwrap();
        assert_eq!(face.units_per_em(), 1000);
        assert_eq!(face.ascender(), 800);
    }

    #[test]
    fn test_char_lookup() {
        let font = FontFace::from_data(SyntheticFont::new().with_square('A').build(), 0).unwrap();
        let face = font.ttf_face().unwrap();
        assert!(face.glyph_index('A').is_some());
        assert!(face.glyph_index('B').is_none());
        assert!(face.glyph_index('\0').is_none());
    }
}
