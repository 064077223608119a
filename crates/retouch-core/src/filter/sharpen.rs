//! Unsharp mask sharpening.
//!
//! `imageops::unsharpen` works in integer steps of the subpixel type, so
//! the premultiplied buffer is quantized to 16 bits for it. The detail it
//! adds back is then scaled by `amount`.

use image::{imageops, ImageBuffer, Rgba, Rgba32FImage};

/// Std-dev of the blur used to build the unsharp mask.
pub(crate) const SHARPEN_SIGMA: f32 = 1.0;

const U16_SCALE: f32 = u16::MAX as f32;

type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Sharpen premultiplied RGBA by adding back `amount` times the detail
/// (`original - blurred`). Alpha is preserved and color stays within it.
pub(crate) fn unsharp_mask(src: &Rgba32FImage, amount: f32) -> Rgba32FImage {
    if amount.is_nan() || amount <= 0.0 || src.width() == 0 || src.height() == 0 {
        return src.clone();
    }

    let quantized: Rgba16Image = ImageBuffer::from_fn(src.width(), src.height(), |x, y| {
        Rgba(src.get_pixel(x, y).0.map(to_u16))
    });
    let sharpened = imageops::unsharpen(&quantized, SHARPEN_SIGMA, 0);

    let mut out = src.clone();
    for (px, sharp) in out.pixels_mut().zip(sharpened.pixels()) {
        let a = px[3];
        for c in 0..3 {
            let detail = sharp[c] as f32 / U16_SCALE - px[c];
            px[c] = (px[c] + amount * detail).clamp(0.0, a);
        }
    }
    out
}

#[inline]
fn to_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * U16_SCALE).round() as u16
}
