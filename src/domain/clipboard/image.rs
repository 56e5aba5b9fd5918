//! Clipboard image value object

use crate::domain::error::InvalidImageError;

/// Bytes per RGBA pixel
const BYTES_PER_PIXEL: usize = 4;

/// Value object representing an image read from the clipboard.
/// Pixels are straight (non-premultiplied) RGBA, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ClipboardImage {
    /// Create an image from RGBA bytes.
    ///
    /// Fails when the dimensions are zero or don't match the buffer length.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, InvalidImageError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
            .filter(|len| *len > 0)
            .ok_or(InvalidImageError::EmptyDimensions { width, height })?;

        if rgba.len() != expected {
            return Err(InvalidImageError::LengthMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw RGBA bytes
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consume and return the raw RGBA bytes
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Get the RGBA value of a pixel, if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.rgba[offset..offset + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Human-readable dimensions, e.g. `640x480`
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
