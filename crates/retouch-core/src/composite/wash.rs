//! Flat color washes for temperature and tint.

use super::blend_over;
use crate::Bitmap;

/// Opacity of every wash layer.
pub const WASH_OPACITY: f32 = 0.1;

/// Bias color for `temperature` (-100 to 100).
///
/// Positive is warm (toward red), negative cool (toward blue); the green
/// component fades out as the magnitude grows.
pub fn temperature_rgb(temperature: f32) -> [f32; 3] {
    let v = temperature / 100.0;
    [
        255.0 * v.max(0.0),
        255.0 * (1.0 - v.abs()).max(0.0),
        255.0 * (-v).max(0.0),
    ]
}

/// Bias color for `tint` (-100 to 100).
///
/// Positive leans green, negative magenta.
pub fn tint_rgb(tint: f32) -> [f32; 3] {
    let v = tint / 100.0;
    [255.0 * (-v).max(0.0), 255.0 * v.max(0.0), 255.0 * (-v).max(0.0)]
}

/// Composite `rgb` over the whole bitmap at `alpha` (source-over).
pub fn fill_wash(bitmap: &Bitmap, rgb: [f32; 3], alpha: f32) -> Bitmap {
    bitmap.map_pixels(|src, dst| {
        dst.copy_from_slice(src);
        blend_over(dst, rgb, alpha);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_extremes() {
        assert_eq!(temperature_rgb(100.0), [255.0, 0.0, 0.0]);
        assert_eq!(temperature_rgb(-100.0), [0.0, 0.0, 255.0]);
        assert_eq!(temperature_rgb(0.0), [0.0, 255.0, 0.0]);
    }

    #[test]
    fn test_temperature_half_warm() {
        assert_eq!(temperature_rgb(50.0), [127.5, 127.5, 0.0]);
    }

    #[test]
    fn test_tint_extremes() {
        assert_eq!(tint_rgb(100.0), [0.0, 255.0, 0.0]);
        assert_eq!(tint_rgb(-100.0), [255.0, 0.0, 255.0]);
        assert_eq!(tint_rgb(0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_warm_wash_on_gray() {
        let src = Bitmap::filled(2, 2, [128, 128, 128, 255]);
        let out = fill_wash(&src, temperature_rgb(100.0), WASH_OPACITY);
        // 255 * 0.1 + 128 * 0.9 = 140.7 ; 128 * 0.9 = 115.2
        assert_eq!(out.get(1, 1), Some([141, 115, 115, 255]));
        assert_eq!(src.get(1, 1), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_cool_wash_on_black() {
        let src = Bitmap::filled(1, 1, [0, 0, 0, 255]);
        let out = fill_wash(&src, temperature_rgb(-100.0), WASH_OPACITY);
        // 255 * 0.1 = 25.5 rounds up
        assert_eq!(out.get(0, 0), Some([0, 0, 26, 255]));
    }

    #[test]
    fn test_wash_over_transparent() {
        let src = Bitmap::filled(1, 1, [0, 0, 0, 0]);
        let out = fill_wash(&src, [255.0, 0.0, 0.0], WASH_OPACITY);
        // Only the wash is left: full red at 10% alpha
        assert_eq!(out.get(0, 0), Some([255, 0, 0, 26]));
    }
}
