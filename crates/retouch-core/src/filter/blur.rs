//! Gaussian blur over premultiplied RGBA.
//!
//! Uses `image::imageops::blur`, which samples past the border by
//! repeating the edge pixel, so edges don't fade toward transparent.

use image::{imageops, Rgba32FImage};

/// Blur `src` (premultiplied) with standard deviation `sigma` pixels.
///
/// A sigma that is zero, negative, subnormal or non-finite returns a copy.
pub(crate) fn gaussian_blur(src: &Rgba32FImage, sigma: f32) -> Rgba32FImage {
    if !sigma.is_normal() || sigma < 0.0 || src.width() == 0 || src.height() == 0 {
        return src.clone();
    }
    imageops::blur(src, sigma)
}
