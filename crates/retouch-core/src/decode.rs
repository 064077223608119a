//! Source decoding for hosts without a native image decoder.
//!
//! Supports PNG, JPEG, WEBP and GIF (first frame). The result is always
//! RGBA8, ready to feed into the render pipeline.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;
use tracing::debug;

use crate::Bitmap;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode encoded image bytes into an RGBA bitmap.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format can't be detected.
/// Returns `DecodeError::CorruptedFile` if the data is damaged.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let bitmap = Bitmap::from_rgba_image(img.into_rgba8());
    debug!(
        width = bitmap.width,
        height = bitmap.height,
        bytes = bytes.len(),
        "decoded source"
    );
    Ok(bitmap)
}
