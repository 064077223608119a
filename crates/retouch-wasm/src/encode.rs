//! Export WASM bindings.
//!
//! Produces an encoded blob plus the metadata the UI needs to offer it as
//! a download.
//!
//! # Example
//!
//! ```typescript
//! const settings = new ExportSettings();
//! settings.set_format('image/jpeg');
//! settings.quality = 90;
//! const blob = render_and_export(source, filters, transform, settings);
//! const url = URL.createObjectURL(new Blob([blob.bytes()], { type: blob.mimeType }));
//! link.download = blob.filename();
//! ```

use crate::settings::{ExportSettings, FilterSettings, TransformSettings};
use crate::types::JsBitmap;
use retouch_core::export::{self, ExportBlob};
use wasm_bindgen::prelude::*;

/// Encoded image bytes with their format.
#[wasm_bindgen]
pub struct JsExportBlob {
    inner: ExportBlob,
}

#[wasm_bindgen]
impl JsExportBlob {
    /// Encoded bytes as Uint8Array (a copy)
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len()
    }

    /// MIME subtype, e.g. `jpeg`
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.extension().to_string()
    }

    #[wasm_bindgen(getter = mimeType)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Download filename; `edited-image.{ext}` when no stem is given.
    pub fn filename(&self, stem: Option<String>) -> String {
        self.inner.suggested_filename(stem.as_deref())
    }
}

/// Encode an already-rendered bitmap.
#[wasm_bindgen]
pub fn export_image(image: &JsBitmap, settings: &ExportSettings) -> Result<JsExportBlob, JsValue> {
    export::export(&image.to_bitmap(), settings.inner())
        .map(|inner| JsExportBlob { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render `image` with export quality, then encode it.
#[wasm_bindgen]
pub fn render_and_export(
    image: &JsBitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
    settings: &ExportSettings,
) -> Result<JsExportBlob, JsValue> {
    export::render_and_export(
        &image.to_bitmap(),
        filters.inner(),
        transform.inner(),
        settings.inner(),
    )
    .map(|inner| JsExportBlob { inner })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
