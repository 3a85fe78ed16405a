//! Avatar decoding.

use std::io::Cursor;

use image::{ImageReader, RgbaImage};

use crate::errors::RenderError;

/// Decode downloaded avatar bytes into an RGBA image, guessing the
/// format from the content.
pub fn decode_avatar(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .expect("Cursor IO should never fail");
    if reader.format().is_none() {
        return Err(RenderError::UnsupportedImageFormat);
    }

    Ok(reader.decode()?.to_rgba8())
}
