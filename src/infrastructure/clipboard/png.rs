//! PNG codec for clipboard images

use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::application::ports::ClipboardError;
use crate::domain::clipboard::ClipboardImage;

/// Encode a clipboard image as PNG bytes
pub fn encode_png(image: &ClipboardImage) -> Result<Vec<u8>, ClipboardError> {
    let size = IntSize::from_wh(image.width(), image.height())
        .ok_or_else(|| ClipboardError::InvalidImage(format!("bad size {}", image.dimensions())))?;

    // Pixmaps store premultiplied alpha
    let data = image
        .rgba()
        .chunks_exact(4)
        .flat_map(|px| {
            let p = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            [p.red(), p.green(), p.blue(), p.alpha()]
        })
        .collect();

    let pixmap = Pixmap::from_vec(data, size)
        .ok_or_else(|| ClipboardError::InvalidImage("pixel buffer mismatch".to_string()))?;

    pixmap
        .encode_png()
        .map_err(|e| ClipboardError::InvalidImage(e.to_string()))
}

/// Decode PNG bytes into a clipboard image
pub fn decode_png(bytes: &[u8]) -> Result<ClipboardImage, ClipboardError> {
    let pixmap =
        Pixmap::decode_png(bytes).map_err(|e| ClipboardError::InvalidImage(e.to_string()))?;

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    ClipboardImage::from_rgba(pixmap.width(), pixmap.height(), rgba)
        .map_err(|e| ClipboardError::InvalidImage(e.to_string()))
}
