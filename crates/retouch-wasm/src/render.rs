//! Render WASM bindings.
//!
//! The UI calls `render_preview` on every slider change (debounced) and
//! `render_export` once when the user downloads.

use crate::settings::{FilterSettings, TransformSettings};
use crate::types::JsBitmap;
use retouch_core::pipeline::{self, RenderOptions};
use wasm_bindgen::prelude::*;

/// Render with bilinear resampling and a transparent background.
///
/// # Example (TypeScript)
/// ```typescript
/// const filters = new FilterSettings();
/// filters.sepia = 60;
/// const preview = render_preview(source, filters, new TransformSettings());
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(preview.pixels()), preview.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn render_preview(
    image: &JsBitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
) -> Result<JsBitmap, JsValue> {
    render_inner(image, filters, transform, &RenderOptions::preview())
}

/// Render with Lanczos3 resampling for the exported file.
#[wasm_bindgen]
pub fn render_export(
    image: &JsBitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
) -> Result<JsBitmap, JsValue> {
    render_inner(image, filters, transform, &RenderOptions::export())
}

/// Render with explicit options: `{ interpolation: 'bilinear' | 'lanczos3',
/// background: [r, g, b, a] }`. Missing fields take the preview values.
#[wasm_bindgen]
pub fn render_with_options(
    image: &JsBitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
    options: JsValue,
) -> Result<JsBitmap, JsValue> {
    let options: RenderOptions = if options.is_undefined() || options.is_null() {
        RenderOptions::preview()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    render_inner(image, filters, transform, &options)
}

fn render_inner(
    image: &JsBitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
    options: &RenderOptions,
) -> Result<JsBitmap, JsValue> {
    let source = image.to_bitmap();
    pipeline::render_with_options(&source, filters.inner(), transform.inner(), options)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> JsBitmap {
        let pixels = [value, value, value, 255].repeat((width * height) as usize);
        JsBitmap::new(width, height, pixels)
    }

    #[test]
    fn test_preview_identity() {
        let pixels: Vec<u8> = (0..6 * 4 * 4).map(|i| (i * 5 % 256) as u8).collect();
        let img = JsBitmap::new(6, 4, pixels.clone());
        let out = render_preview(&img, &FilterSettings::new(), &TransformSettings::new()).unwrap();
        assert_eq!(out.width(), 6);
        assert_eq!(out.height(), 4);
        assert_eq!(out.pixels(), pixels);
    }

    #[test]
    fn test_preview_applies_exposure() {
        let img = gray(2, 2, 128);
        let mut filters = FilterSettings::new();
        filters.set_exposure(50.0).unwrap();
        let out = render_preview(&img, &filters, &TransformSettings::new()).unwrap();
        assert_eq!(out.pixels(), [64, 64, 64, 255].repeat(4));
    }

    #[test]
    fn test_export_render_keeps_dimensions() {
        let img = gray(9, 5, 200);
        let mut transform = TransformSettings::new();
        transform.set_rotate(30.0).unwrap();
        let out = render_export(&img, &FilterSettings::new(), &transform).unwrap();
        assert_eq!((out.width(), out.height()), (9, 5));
    }

    #[test]
    fn test_source_untouched() {
        let img = gray(3, 3, 77);
        let mut filters = FilterSettings::new();
        filters.set_invert(100.0).unwrap();
        let _ = render_preview(&img, &filters, &TransformSettings::new()).unwrap();
        assert_eq!(img.pixels(), [77, 77, 77, 255].repeat(9));
    }
}
