//! Composite effects stage.
//!
//! Runs on the transformed bitmap. Washes and the vignette are painted on
//! top of it; tone gains rewrite its bytes directly.
//!
//! ## Effect Order
//!
//! 1. Temperature wash (skipped at 0)
//! 2. Tint wash (skipped at 0)
//! 3. Vignette (skipped at 0)
//! 4. Exposure, then highlight/shadow gain

mod tone;
mod vignette;
mod wash;

pub use tone::{apply_tone, HIGHLIGHT_THRESHOLD};
pub use vignette::{apply_vignette, vignette_alpha};
pub use wash::{fill_wash, temperature_rgb, tint_rgb, WASH_OPACITY};

use crate::settings::FilterSettings;
use crate::{Bitmap, EditError};

/// Apply every composite effect in `settings` to `bitmap`.
///
/// With temperature, tint and vignette at 0 and the tone gains at 100 the
/// output equals the input.
///
/// # Errors
///
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
pub fn apply_composite_effects(
    bitmap: &Bitmap,
    settings: &FilterSettings,
) -> Result<Bitmap, EditError> {
    bitmap.validate()?;
    let mut out = bitmap.clone();

    if settings.temperature != 0.0 {
        out = fill_wash(&out, temperature_rgb(settings.temperature), WASH_OPACITY);
    }
    if settings.tint != 0.0 {
        out = fill_wash(&out, tint_rgb(settings.tint), WASH_OPACITY);
    }
    if settings.vignette != 0.0 {
        out = apply_vignette(&out, settings.vignette)?;
    }

    Ok(apply_tone(
        &out,
        settings.exposure,
        settings.highlight,
        settings.shadow,
    ))
}

/// Source-over blend of a solid color onto one RGBA pixel.
///
/// `rgb` is in 0-255, `alpha` in 0-1. Colors are straight (not
/// premultiplied), matching how a 2D canvas stores them.
pub(crate) fn blend_over(dst: &mut [u8], rgb: [f32; 3], alpha: f32) {
    let src_a = alpha.clamp(0.0, 1.0);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    if out_a <= 0.0 {
        dst.fill(0);
        return;
    }

    let dst_weight = dst_a * (1.0 - src_a);
    for c in 0..3 {
        let v = (rgb[c] * src_a + dst[c] as f32 * dst_weight) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
