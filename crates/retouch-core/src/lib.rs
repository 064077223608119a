//! Retouch Core - client-side photo editing render pipeline
//!
//! This crate turns a source bitmap plus a set of editing parameters into
//! a rendered bitmap, and serializes rendered bitmaps for download.
//!
//! ## Pipeline
//!
//! 1. Color filters (CSS filter-function math, blur, sharpen, opacity, invert)
//! 2. Geometric transform (rotate, flip, zoom around the center)
//! 3. Composite effects (temperature/tint washes, vignette, exposure and
//!    highlight/shadow gains)
//! 4. Encode (PNG, JPEG, WEBP, GIF), on demand
//!
//! Settings are plain values passed into every call; nothing is cached
//! between renders and the caller's source is never modified.

mod bitmap;
pub mod composite;
pub mod decode;
pub mod encode;
mod error;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod settings;
pub mod transform;

pub use bitmap::{Bitmap, CHANNELS};
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_bitmap, EncodeError};
pub use error::EditError;
pub use export::{export, render_and_export, ExportBlob, DEFAULT_FILENAME_STEM};
pub use filter::apply_color_filters;
pub use pipeline::{render, render_with_options, RenderOptions};
pub use settings::{
    filter_descriptors, ExportFormat, ExportSettings, FilterCategory, FilterDescriptor,
    FilterName, FilterSettings, TransformSettings,
};
pub use transform::{apply_crop, apply_transform, InterpolationFilter};
