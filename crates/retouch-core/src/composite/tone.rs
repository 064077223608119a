//! Exposure, highlight and shadow gains.
//!
//! For every pixel:
//! 1. Scale R, G, B by `exposure / 100`
//! 2. Take the unweighted mean of the scaled channels
//! 3. Mean above 128 scales by `highlight / 100`, otherwise `shadow / 100`
//!
//! Channels are stored as clamped bytes after each scale, rounding half to
//! even, so the branch in step 3 sees the already-clamped exposure result.
//! Alpha is untouched.

use crate::Bitmap;

/// Mean channel value above which a pixel counts as a highlight.
pub const HIGHLIGHT_THRESHOLD: f32 = 128.0;

pub fn apply_tone(bitmap: &Bitmap, exposure: f32, highlight: f32, shadow: f32) -> Bitmap {
    // Early exit if no adjustments
    if exposure == 100.0 && highlight == 100.0 && shadow == 100.0 {
        return bitmap.clone();
    }

    let exposure = exposure / 100.0;
    let highlight = highlight / 100.0;
    let shadow = shadow / 100.0;

    bitmap.map_pixels(|src, dst| {
        let mut rgb = [
            scale(src[0], exposure),
            scale(src[1], exposure),
            scale(src[2], exposure),
        ];
        let mean = (rgb[0] as f32 + rgb[1] as f32 + rgb[2] as f32) / 3.0;
        let gain = if mean > HIGHLIGHT_THRESHOLD {
            highlight
        } else {
            shadow
        };
        for c in &mut rgb {
            *c = scale(*c, gain);
        }
        dst[..3].copy_from_slice(&rgb);
        dst[3] = src[3];
    })
}

#[inline]
fn scale(v: u8, factor: f32) -> u8 {
    (v as f32 * factor).round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rgb: [u8; 3], exposure: f32, highlight: f32, shadow: f32) -> [u8; 4] {
        let src = Bitmap::filled(1, 1, [rgb[0], rgb[1], rgb[2], 255]);
        apply_tone(&src, exposure, highlight, shadow).get(0, 0).unwrap()
    }

    #[test]
    fn test_defaults_are_identity() {
        let src = Bitmap::new(2, 1, vec![10, 200, 130, 255, 255, 0, 90, 7]).unwrap();
        assert_eq!(apply_tone(&src, 100.0, 100.0, 100.0), src);
    }

    #[test]
    fn test_half_exposure_on_mid_gray() {
        // 128 * 0.5 = 64, mean 64 <= 128 -> shadow factor 1.0
        assert_eq!(apply([128, 128, 128], 50.0, 100.0, 100.0), [64, 64, 64, 255]);
    }

    #[test]
    fn test_exposure_clamps_at_white() {
        assert_eq!(apply([200, 200, 200], 200.0, 100.0, 100.0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_highlight_branch() {
        // mean 200 > 128 -> highlight 0.5
        assert_eq!(apply([200, 200, 200], 100.0, 50.0, 200.0), [100, 100, 100, 255]);
    }

    #[test]
    fn test_shadow_branch() {
        // mean 60 <= 128 -> shadow 1.5
        assert_eq!(apply([60, 60, 60], 100.0, 50.0, 150.0), [90, 90, 90, 255]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // mean exactly 128 takes the shadow branch
        assert_eq!(apply([128, 128, 128], 100.0, 0.0, 100.0), [128, 128, 128, 255]);
    }

    #[test]
    fn test_branch_uses_exposed_values() {
        // 100 * 1.5 = 150 -> now a highlight
        assert_eq!(apply([100, 100, 100], 150.0, 50.0, 100.0), [75, 75, 75, 255]);
    }

    #[test]
    fn test_shadow_boost_clamps() {
        assert_eq!(apply([120, 10, 250], 100.0, 100.0, 200.0), [240, 20, 255, 255]);
    }

    #[test]
    fn test_rounding_half_to_even() {
        // 5 * 0.5 = 2.5 -> 2 ; 7 * 0.5 = 3.5 -> 4
        assert_eq!(apply([5, 7, 5], 50.0, 100.0, 100.0), [2, 4, 2, 255]);
    }

    #[test]
    fn test_alpha_preserved() {
        let src = Bitmap::filled(1, 1, [100, 100, 100, 42]);
        let out = apply_tone(&src, 50.0, 100.0, 100.0);
        assert_eq!(out.get(0, 0).unwrap()[3], 42);
    }
}
