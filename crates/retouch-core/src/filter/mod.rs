//! Color filter stage.
//!
//! Equivalent to applying these filters one after another:
//!
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//! 4. Sepia
//! 5. Grayscale
//! 6. Hue rotation
//! 7. Blur (Gaussian, std-dev = `blur` pixels)
//! 8. Sharpen (unsharp mask)
//! 9. Opacity
//! 10. Invert
//!
//! Steps 1-6 and 9-10 are per-pixel and run as a chained transform in a
//! single pass each. Steps 7-8 are spatial: they run through
//! `image::imageops` on a premultiplied floating-point copy so that
//! transparent pixels don't bleed color.

mod blur;
mod color;
mod sharpen;

use image::Rgba32FImage;

use crate::settings::FilterSettings;
use crate::{Bitmap, EditError};

/// Apply the color filter stage, returning a new bitmap.
///
/// # Errors
///
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
pub fn apply_color_filters(
    bitmap: &Bitmap,
    filters: &FilterSettings,
) -> Result<Bitmap, EditError> {
    bitmap.validate()?;

    let spatial = (filters.blur > 0.0 || filters.sharpen > 0.0) && !bitmap.is_empty();
    let post = filters.opacity != 100.0 || filters.invert != 0.0;
    if color::is_color_chain_identity(filters) && !spatial && !post {
        return Ok(bitmap.clone());
    }

    let mut buf: Vec<f32> = Vec::with_capacity(bitmap.pixels.len());
    for px in bitmap.pixels.chunks_exact(4) {
        let (r, g, b) = color::apply_color_chain(
            (to_unit(px[0]), to_unit(px[1]), to_unit(px[2])),
            filters,
        );
        buf.extend_from_slice(&[r, g, b, to_unit(px[3])]);
    }

    if spatial {
        premultiply(&mut buf);
        let len = buf.len();
        let mut image = Rgba32FImage::from_raw(bitmap.width, bitmap.height, buf).ok_or(
            EditError::InvalidPixelData {
                expected: bitmap.pixels.len(),
                actual: len,
            },
        )?;
        if filters.blur > 0.0 {
            image = blur::gaussian_blur(&image, filters.blur);
        }
        if filters.sharpen > 0.0 {
            image = sharpen::unsharp_mask(&image, filters.sharpen / 100.0);
        }
        buf = image.into_raw();
        unpremultiply(&mut buf);
    }

    let opacity = filters.opacity / 100.0;
    let invert = filters.invert / 100.0;
    let mut pixels = Vec::with_capacity(bitmap.pixels.len());
    for px in buf.chunks_exact(4) {
        let (r, g, b) = color::apply_invert((px[0], px[1], px[2]), invert);
        let a = color::apply_opacity(px[3], opacity);
        pixels.extend_from_slice(&[from_unit(r), from_unit(g), from_unit(b), from_unit(a)]);
    }

    Ok(Bitmap {
        width: bitmap.width,
        height: bitmap.height,
        pixels,
    })
}

#[inline]
fn to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn from_unit(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn premultiply(buf: &mut [f32]) {
    for px in buf.chunks_exact_mut(4) {
        let a = px[3];
        px[0] *= a;
        px[1] *= a;
        px[2] *= a;
    }
}

fn unpremultiply(buf: &mut [f32]) {
    for px in buf.chunks_exact_mut(4) {
        let a = px[3];
        if a > 0.0 {
            px[0] = (px[0] / a).min(1.0);
            px[1] = (px[1] / a).min(1.0);
            px[2] = (px[2] / a).min(1.0);
        } else {
            px.fill(0.0);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..=8, 1u32..=8).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| Bitmap::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: default filters never change a pixel.
        #[test]
        fn prop_defaults_are_identity(src in bitmap_strategy()) {
            prop_assert_eq!(apply_color_filters(&src, &FilterSettings::default()).unwrap(), src);
        }

        /// Property: dimensions are preserved for any in-range settings.
        #[test]
        fn prop_dimensions_preserved(
            src in bitmap_strategy(),
            blur in 0.0f32..=5.0,
            sepia in 0.0f32..=100.0,
            hue in 0.0f32..=360.0,
        ) {
            let mut filters = FilterSettings::default();
            filters.blur = blur;
            filters.sepia = sepia;
            filters.hue_rotate = hue;
            let out = apply_color_filters(&src, &filters).unwrap();
            prop_assert_eq!(out.width, src.width);
            prop_assert_eq!(out.height, src.height);
            prop_assert_eq!(out.pixels.len(), src.pixels.len());
        }

        /// Property: opacity 0 makes every pixel fully transparent.
        #[test]
        fn prop_zero_opacity_is_transparent(src in bitmap_strategy()) {
            let mut filters = FilterSettings::default();
            filters.opacity = 0.0;
            let out = apply_color_filters(&src, &filters).unwrap();
            prop_assert!(out.pixels.chunks_exact(4).all(|p| p[3] == 0));
        }
    }
}
