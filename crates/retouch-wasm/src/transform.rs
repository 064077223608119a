//! WASM bindings for crop preprocessing.
//!
//! The render pipeline expects an already-cropped source; this lets the UI
//! crop without a canvas round-trip.

use crate::types::JsBitmap;
use retouch_core::transform::apply_crop as core_crop;
use wasm_bindgen::prelude::*;

/// Apply crop to an image using normalized coordinates.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `left` - Left edge position (0.0 to 1.0)
/// * `top` - Top edge position (0.0 to 1.0)
/// * `width` - Crop region width (0.0 to 1.0)
/// * `height` - Crop region height (0.0 to 1.0)
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Crop the center 50% of the image
/// const cropped = apply_crop(sourceImage, 0.25, 0.25, 0.5, 0.5);
/// ```
///
/// Throws if the pixel buffer doesn't match the dimensions.
#[wasm_bindgen]
pub fn apply_crop(
    image: &JsBitmap,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Result<JsBitmap, JsValue> {
    core_crop(&image.to_bitmap(), left, top, width, height)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsBitmap {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsBitmap::new(width, height, pixels)
    }

    #[test]
    fn test_crop_full_image() {
        let img = test_image(20, 10);
        let result = apply_crop(&img, 0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(result.width(), 20);
        assert_eq!(result.height(), 10);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_crop_center() {
        let img = test_image(100, 80);
        let result = apply_crop(&img, 0.25, 0.25, 0.5, 0.5).unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 40);
        assert_eq!(result.byte_length(), 50 * 40 * 4);
    }

    #[test]
    fn test_crop_minimum_size() {
        let img = test_image(10, 10);
        let result = apply_crop(&img, 0.5, 0.5, 0.0, 0.0).unwrap();
        assert_eq!(result.width(), 1);
        assert_eq!(result.height(), 1);
    }
}
