//! Per-channel color filter functions.
//!
//! Each function follows the CSS filter-function definition of the same
//! name, operating on normalized (0.0 to 1.0) channel values. Results are
//! clamped to 0.0-1.0 so the next function sees a valid color, the same as
//! chaining separate filter primitives.
//!
//! ## Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//! 4. Sepia
//! 5. Grayscale
//! 6. Hue rotation
//!
//! Opacity and inversion run after the spatial filters and live here too.

use crate::settings::FilterSettings;

type Rgb = (f32, f32, f32);

/// Apply the pre-spatial color functions, in order, to one pixel.
#[inline]
pub(crate) fn apply_color_chain(rgb: Rgb, filters: &FilterSettings) -> Rgb {
    let mut rgb = rgb;
    rgb = apply_brightness(rgb, filters.brightness / 100.0);
    rgb = apply_contrast(rgb, filters.contrast / 100.0);
    rgb = apply_saturation(rgb, filters.saturation / 100.0);
    rgb = apply_sepia(rgb, filters.sepia / 100.0);
    rgb = apply_grayscale(rgb, filters.grayscale / 100.0);
    apply_hue_rotate(rgb, filters.hue_rotate)
}

/// True when [`apply_color_chain`] leaves every pixel unchanged.
pub(crate) fn is_color_chain_identity(filters: &FilterSettings) -> bool {
    filters.brightness == 100.0
        && filters.contrast == 100.0
        && filters.saturation == 100.0
        && filters.sepia == 0.0
        && filters.grayscale == 0.0
        && filters.hue_rotate % 360.0 == 0.0
}

/// Brightness: linear gain.
///
/// Formula: `output = input * amount`
#[inline]
fn apply_brightness((r, g, b): Rgb, amount: f32) -> Rgb {
    if amount == 1.0 {
        return (r, g, b);
    }
    (clamp01(r * amount), clamp01(g * amount), clamp01(b * amount))
}

/// Contrast around mid-gray.
///
/// Formula: `output = (input - 0.5) * amount + 0.5`
#[inline]
fn apply_contrast((r, g, b): Rgb, amount: f32) -> Rgb {
    if amount == 1.0 {
        return (r, g, b);
    }
    let contrast = |c: f32| clamp01((c - 0.5) * amount + 0.5);
    (contrast(r), contrast(g), contrast(b))
}

/// Saturation via the `saturate()` color matrix.
///
/// `amount` 0 is fully desaturated, 1 unchanged, above 1 oversaturated.
#[inline]
fn apply_saturation(rgb: Rgb, s: f32) -> Rgb {
    if s == 1.0 {
        return rgb;
    }
    let m = [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ];
    apply_matrix(rgb, &m)
}

/// Sepia mix, `amount` 0.0 to 1.0.
#[inline]
fn apply_sepia(rgb: Rgb, amount: f32) -> Rgb {
    if amount == 0.0 {
        return rgb;
    }
    let k = 1.0 - amount.clamp(0.0, 1.0);
    let m = [
        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
    ];
    apply_matrix(rgb, &m)
}

/// Grayscale mix using BT.709 luma weights, `amount` 0.0 to 1.0.
#[inline]
fn apply_grayscale(rgb: Rgb, amount: f32) -> Rgb {
    if amount == 0.0 {
        return rgb;
    }
    let k = 1.0 - amount.clamp(0.0, 1.0);
    let m = [
        [0.2126 + 0.7874 * k, 0.7152 - 0.7152 * k, 0.0722 - 0.0722 * k],
        [0.2126 - 0.2126 * k, 0.7152 + 0.2848 * k, 0.0722 - 0.0722 * k],
        [0.2126 - 0.2126 * k, 0.7152 - 0.7152 * k, 0.0722 + 0.9278 * k],
    ];
    apply_matrix(rgb, &m)
}

/// Hue rotation by `degrees`, luminance preserving.
#[inline]
fn apply_hue_rotate(rgb: Rgb, degrees: f32) -> Rgb {
    if degrees % 360.0 == 0.0 {
        return rgb;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let m = [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ];
    apply_matrix(rgb, &m)
}

/// Inversion mix, `amount` 0.0 to 1.0.
///
/// Formula: `output = amount * (1 - input) + (1 - amount) * input`
#[inline]
pub(crate) fn apply_invert((r, g, b): Rgb, amount: f32) -> Rgb {
    if amount == 0.0 {
        return (r, g, b);
    }
    let invert = |c: f32| clamp01(amount * (1.0 - c) + (1.0 - amount) * c);
    (invert(r), invert(g), invert(b))
}

/// Opacity: scale alpha by `amount` (0.0 to 1.0).
#[inline]
pub(crate) fn apply_opacity(alpha: f32, amount: f32) -> f32 {
    clamp01(alpha * amount)
}

#[inline]
fn apply_matrix((r, g, b): Rgb, m: &[[f32; 3]; 3]) -> Rgb {
    (
        clamp01(m[0][0] * r + m[0][1] * g + m[0][2] * b),
        clamp01(m[1][0] * r + m[1][1] * g + m[1][2] * b),
        clamp01(m[2][0] * r + m[2][1] * g + m[2][2] * b),
    )
}

#[inline]
fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
