//! JPEG encoding.
//!
//! JPEG has no alpha channel. Transparent areas are composited over black
//! before encoding, the same result a browser canvas gives when asked for
//! `image/jpeg`.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_bitmap, failed, EncodeError};
use crate::settings::ExportFormat;
use crate::Bitmap;

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - RGBA source; alpha is flattened over black
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 60-90: Good quality for web/social media
/// * Below 60: Visible artifacts
pub fn encode_jpeg(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_bitmap(bitmap)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);
    let rgb = flatten_over_black(&bitmap.pixels);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
        .map_err(|e| failed(ExportFormat::Jpeg, e))?;

    Ok(buffer.into_inner())
}

/// Drop the alpha channel of RGBA pixels, compositing them over black.
pub fn flatten_over_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3] as u32;
        if a == 255 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            // Rounded c * a / 255
            rgb.extend(px[..3].iter().map(|&c| ((c as u32 * a + 127) / 255) as u8));
        }
    }
    rgb
}
