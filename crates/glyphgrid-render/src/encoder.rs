//! Image encoder for the finished canvas
//!
//! PNG is written natively as 1-bit grayscale. The other formats go through
//! the image crate as black/white RGB. Only lossless encoders are offered;
//! JPEG would smear the two levels into greys.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat as ImgFormat, Rgb, RgbImage};

use crate::{Canvas, FOREGROUND, RenderError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Gif,
    WebP,
    Bmp,
    Unknown,
}

impl ImageFormat {
    /// Get format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" => Self::Png,
            "gif" => Self::Gif,
            "webp" => Self::WebP,
            "bmp" => Self::Bmp,
            _ => Self::Unknown,
        }
    }

    /// Get format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Convert to image crate format
    fn to_image_format(self) -> Option<ImgFormat> {
        match self {
            Self::Png => Some(ImgFormat::Png),
            Self::Gif => Some(ImgFormat::Gif),
            Self::WebP => Some(ImgFormat::WebP),
            Self::Bmp => Some(ImgFormat::Bmp),
            Self::Unknown => None,
        }
    }
}

/// Canvas encoder
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode `canvas` to `path`, picking the format from the extension
    pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "encoding canvas");

        match format {
            ImageFormat::Png => Self::save_png(canvas, path),
            ImageFormat::Unknown => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
            other => Self::save_with_format(canvas, path, other),
        }
    }

    /// Write a 1-bit grayscale PNG
    pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let encode_err = |e: png::EncodingError| RenderError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut encoder = png::Encoder::new(BufWriter::new(file), canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);

        let mut writer = encoder.write_header().map_err(encode_err)?;
        writer.write_image_data(&canvas.packed_rows()).map_err(encode_err)?;
        writer.finish().map_err(encode_err)
    }

    fn save_with_format(canvas: &Canvas, path: &Path, format: ImageFormat) -> Result<()> {
        let img_format = format
            .to_image_format()
            .ok_or_else(|| RenderError::UnsupportedFormat(path.to_path_buf()))?;

        let image = RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            match canvas.get(x, y) {
                Some(FOREGROUND) => Rgb([0, 0, 0]),
                _ => Rgb([255, 255, 255]),
            }
        });

        image.save_with_format(path, img_format).map_err(|e| match e {
            image::ImageError::IoError(source) => RenderError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => RenderError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })
    }
}
