//! Image normalization helpers.
//!
//! Every clipboard image is delivered as PNG regardless of its source
//! encoding. These helpers decode whatever the OS hands over (PNG, JPEG,
//! GIF, BMP) and re-encode it as PNG; a failed decode marks the candidate
//! as unusable and classification moves on.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::{PasteError, PasteResult};

/// Decode image bytes in any supported encoding and re-encode as PNG.
pub fn reencode_png(data: &[u8]) -> PasteResult<Vec<u8>> {
    let image = image::load_from_memory(data).map_err(|e| PasteError::ImageDecode(e.to_string()))?;
    encode_png(&image)
}

/// Decode an image file from disk and re-encode as PNG.
///
/// Used for file-drop entries that passed the extension check; an
/// unreadable or mislabeled file fails here and is skipped.
pub fn file_to_png(path: &Path) -> PasteResult<Vec<u8>> {
    let image = image::open(path).map_err(|e| PasteError::ImageDecode(e.to_string()))?;
    encode_png(&image)
}

fn encode_png(image: &DynamicImage) -> PasteResult<Vec<u8>> {
    let mut png_data = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut png_data), ImageFormat::Png)
        .map_err(|e| PasteError::ImageEncode(e.to_string()))?;
    Ok(png_data)
}
