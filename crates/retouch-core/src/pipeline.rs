//! The render pipeline.
//!
//! `(source, FilterSettings, TransformSettings) -> Bitmap`, deterministic
//! and side-effect free. Stages run in a fixed order:
//!
//! 1. Color filters (brightness ... invert), see [`crate::filter`]
//! 2. Geometric transform (rotate, flip, zoom), see [`crate::transform`]
//! 3. Composite effects (washes, vignette, tone), see [`crate::composite`]
//!
//! Encoding is a separate step, see [`crate::export`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composite::apply_composite_effects;
use crate::filter::apply_color_filters;
use crate::settings::{FilterSettings, TransformSettings};
use crate::transform::{apply_transform, InterpolationFilter};
use crate::{Bitmap, EditError};

/// Knobs that affect quality, not the look of the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Resampling filter for the transform stage
    pub interpolation: InterpolationFilter,
    /// RGBA fill for areas the transformed source doesn't cover
    pub background: [u8; 4],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::preview()
    }
}

impl RenderOptions {
    /// Fast settings for interactive previews.
    pub fn preview() -> Self {
        Self {
            interpolation: InterpolationFilter::Bilinear,
            background: [0, 0, 0, 0],
        }
    }

    /// Higher-quality resampling for the final file.
    pub fn export() -> Self {
        Self {
            interpolation: InterpolationFilter::Lanczos3,
            ..Self::preview()
        }
    }
}

/// Render with the preview options.
pub fn render(
    source: &Bitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
) -> Result<Bitmap, EditError> {
    render_with_options(source, filters, transform, &RenderOptions::preview())
}

/// Render `source` through every stage.
///
/// # Errors
///
/// * `EmptySource` if the source has no pixels
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
/// * `InvalidParameter` if any setting is out of range or non-finite
#[tracing::instrument(
    skip_all,
    fields(width = source.width, height = source.height, interpolation = ?options.interpolation)
)]
pub fn render_with_options(
    source: &Bitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
    options: &RenderOptions,
) -> Result<Bitmap, EditError> {
    if source.is_empty() {
        return Err(EditError::EmptySource);
    }
    source.validate()?;
    filters.validate()?;
    transform.validate()?;

    let filtered = apply_color_filters(source, filters)?;
    debug!("color filter stage done");

    let transformed = apply_transform(
        &filtered,
        transform,
        options.interpolation,
        options.background,
    )?;
    debug!(identity = transform.is_identity(), "transform stage done");

    let output = apply_composite_effects(&transformed, filters)?;
    debug!("composite stage done");

    Ok(output)
}
