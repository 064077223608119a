//! Image decoding WASM bindings.
//!
//! Browsers normally decode through `<img>` + canvas. This path exists for
//! workers and other hosts without a canvas.

use crate::types::JsBitmap;
use retouch_core::decode;
use wasm_bindgen::prelude::*;

/// Decode PNG, JPEG, WEBP or GIF bytes into an RGBA bitmap.
///
/// # Errors
///
/// Throws if the format is unrecognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::{encode_bitmap, Bitmap, ExportFormat};

    #[test]
    fn test_decode_png() {
        let bitmap = Bitmap::filled(4, 3, [12, 34, 56, 78]);
        let bytes = encode_bitmap(&bitmap, ExportFormat::Png, 92).unwrap();
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.pixels(), bitmap.pixels);
    }
}
