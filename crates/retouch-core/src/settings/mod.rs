//! Parameter model: filter, transform and export settings.
//!
//! These are plain values owned by the UI shell and passed into each
//! render. They hold no behavior beyond clamping and validation.
//!
//! # Ranges
//!
//! | group | field | range | default |
//! |---|---|---|---|
//! | filter | brightness, contrast, saturation, exposure, highlight, shadow | 0-200 | 100 |
//! | filter | temperature, tint | -100-100 | 0 |
//! | filter | hueRotate | 0-360 | 0 |
//! | filter | sepia, grayscale, invert, sharpen, vignette | 0-100 | 0 |
//! | filter | opacity | 0-100 | 100 |
//! | filter | blur | 0-20 | 0 |
//! | transform | rotate | -180-180 | 0 |
//! | transform | flipH, flipV | ±1 | 1 |
//! | transform | zoom | 0.5-3.0 | 1.0 |
//! | export | quality | 1-100 | 92 |

mod export;
mod filters;
mod transform;

pub use export::{ExportFormat, ExportSettings, DEFAULT_QUALITY};
pub use filters::{
    filter_descriptors, FilterCategory, FilterDescriptor, FilterName, FilterSettings,
};
pub use transform::{TransformSettings, ROTATE_RANGE, ZOOM_RANGE};
