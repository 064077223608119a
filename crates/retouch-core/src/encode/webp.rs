//! WebP encoding.
//!
//! The `image` crate only ships a lossless WebP encoder, so the output
//! keeps every pixel exactly and export quality has no effect.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_bitmap, failed, EncodeError};
use crate::settings::ExportFormat;
use crate::Bitmap;

pub fn encode_webp(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    check_bitmap(bitmap)?;

    let mut buffer = Cursor::new(Vec::new());
    WebPEncoder::new_lossless(&mut buffer)
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| failed(ExportFormat::Webp, e))?;

    Ok(buffer.into_inner())
}
