//! PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_bitmap, failed, EncodeError};
use crate::settings::ExportFormat;
use crate::Bitmap;

/// Encode a bitmap to lossless RGBA PNG bytes.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    check_bitmap(bitmap)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| failed(ExportFormat::Png, e))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_exact() {
        let pixels: Vec<u8> = (0..9 * 7 * 4).map(|i| (i * 31 % 256) as u8).collect();
        let img = Bitmap::new(9, 7, pixels).unwrap();

        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!(Bitmap::from_rgba_image(decoded), img);
    }

    #[test]
    fn test_single_pixel() {
        let img = Bitmap::filled(1, 1, [1, 2, 3, 4]);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
