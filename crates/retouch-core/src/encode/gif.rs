//! GIF encoding.
//!
//! The encoder quantizes RGBA input to a 256-color palette. Fully
//! transparent pixels map to the palette's transparent index.

use std::io::Cursor;

use image::codecs::gif::GifEncoder;
use image::ExtendedColorType;

use super::{check_bitmap, failed, EncodeError};
use crate::settings::ExportFormat;
use crate::Bitmap;

pub fn encode_gif(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    check_bitmap(bitmap)?;

    let mut buffer = Cursor::new(Vec::new());
    {
        // The trailer is written when the encoder is dropped
        let mut encoder = GifEncoder::new(&mut buffer);
        encoder
            .encode(
                &bitmap.pixels,
                bitmap.width,
                bitmap.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| failed(ExportFormat::Gif, e))?;
    }

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_color_survives() {
        let img = Bitmap::filled(8, 8, [255, 0, 0, 255]);
        let bytes = encode_gif(&img).unwrap();
        assert_eq!(&bytes[0..6], b"GIF89a");
        assert_eq!(bytes.last(), Some(&0x3B));

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        let px = decoded.get_pixel(4, 4).0;
        assert!(px[0] > 240 && px[1] < 16 && px[2] < 16);
        assert_eq!(px[3], 255);
    }
}
