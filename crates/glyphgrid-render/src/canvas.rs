//! Canvas - 1-bit pixel buffer

use glyphgrid_text::InkSurface;

use crate::{BACKGROUND, FOREGROUND, PixelRect, RenderError, Result};

/// 1-bit pixel canvas, one byte per pixel holding 0 or 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a new background-filled canvas
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel value
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a pixel value; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = value & 1;
        }
    }

    /// Copy a rectangle out as a bitmap record
    pub fn crop(&self, rect: PixelRect) -> Result<BitmapRecord> {
        if rect.right() > self.width || rect.bottom() > self.height {
            return Err(RenderError::CropOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }

        let mut values = Vec::with_capacity(rect.area());
        for y in rect.y..rect.bottom() {
            let start = self.index(rect.x, y);
            values.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }

        Ok(BitmapRecord {
            width: rect.width,
            height: rect.height,
            values,
        })
    }

    /// Rows packed MSB-first at one bit per pixel, each row byte-aligned
    pub fn packed_rows(&self) -> Vec<u8> {
        let stride = (self.width as usize).div_ceil(8);
        let mut packed = vec![0u8; stride * self.height as usize];
        for (y, row) in self.pixels.chunks(self.width.max(1) as usize).enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == BACKGROUND {
                    packed[y * stride + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        packed
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl InkSurface for Canvas {
    fn put_ink(&mut self, x: u32, y: u32) {
        self.set_pixel(x, y, FOREGROUND);
    }
}

/// Flattened pixel values of one cropped cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapRecord {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl BitmapRecord {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major 0/1 values, `width * height` long
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.values.chunks(self.width.max(1) as usize)
    }

    /// Number of foreground pixels
    pub fn ink_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// True if no pixel is foreground
    pub fn is_blank(&self) -> bool {
        self.ink_count() == 0
    }
}
