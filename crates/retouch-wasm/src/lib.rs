//! Retouch WASM - WebAssembly bindings for the Retouch render pipeline
//!
//! This crate exposes retouch-core to the browser UI shell.
//!
//! # Module Structure
//!
//! - `types` - RGBA bitmap wrapper passed across the boundary
//! - `settings` - Filter, transform and export settings wrappers
//! - `render` - Preview and export renders
//! - `encode` - Export to PNG / JPEG / WEBP / GIF blobs
//! - `decode` - Source decoding for hosts without a canvas
//! - `transform` - Crop preprocessing
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmap, FilterSettings, TransformSettings, render_preview } from '@retouch/wasm';
//!
//! await init();
//!
//! const source = new JsBitmap(imageData.width, imageData.height, imageData.data);
//! const filters = new FilterSettings();
//! filters.set('brightness', 120);
//! const preview = render_preview(source, filters, new TransformSettings());
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod render;
mod settings;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::{export_image, render_and_export, JsExportBlob};
pub use render::{render_export, render_preview, render_with_options};
pub use settings::{
    filter_categories, filter_descriptors, ExportSettings, FilterSettings, TransformSettings,
};
pub use transform::apply_crop;
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
