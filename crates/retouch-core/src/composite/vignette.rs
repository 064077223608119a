//! Radial vignette.
//!
//! A black radial gradient centered on the image, composited over it. The
//! gradient radius is half the longer image dimension, with stops:
//!
//! | position | alpha |
//! |---|---|
//! | 0 (center) | 0 |
//! | 0.5 | strength / 200 |
//! | 1.0 | strength / 100 |
//!
//! Beyond the radius (the corners of non-square images) the last stop
//! repeats.

use super::blend_over;
use crate::{Bitmap, EditError};

/// Gradient alpha at normalized distance `t` from the center.
pub fn vignette_alpha(t: f32, strength: f32) -> f32 {
    let mid = strength / 200.0;
    let edge = strength / 100.0;
    if t <= 0.0 {
        0.0
    } else if t <= 0.5 {
        mid * (t / 0.5)
    } else if t < 1.0 {
        mid + (edge - mid) * ((t - 0.5) / 0.5)
    } else {
        edge
    }
}

/// Darken toward the edges. `strength` is the 0-100 vignette value.
///
/// # Errors
///
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
pub fn apply_vignette(bitmap: &Bitmap, strength: f32) -> Result<Bitmap, EditError> {
    bitmap.validate()?;
    if strength <= 0.0 || bitmap.is_empty() {
        return Ok(bitmap.clone());
    }

    let cx = bitmap.width as f32 / 2.0;
    let cy = bitmap.height as f32 / 2.0;
    let radius = bitmap.width.max(bitmap.height) as f32 / 2.0;

    let mut out = bitmap.clone();
    for y in 0..bitmap.height {
        let dy = y as f32 + 0.5 - cy;
        for x in 0..bitmap.width {
            let dx = x as f32 + 0.5 - cx;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = vignette_alpha(t, strength);
            if alpha > 0.0 {
                let idx = out.index(x, y);
                blend_over(&mut out.pixels[idx..idx + 4], [0.0; 3], alpha);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_stops() {
        assert_eq!(vignette_alpha(0.0, 100.0), 0.0);
        assert_eq!(vignette_alpha(0.5, 100.0), 0.5);
        assert_eq!(vignette_alpha(1.0, 100.0), 1.0);
        assert_eq!(vignette_alpha(1.4, 60.0), 0.6);
        assert!((vignette_alpha(0.25, 80.0) - 0.2).abs() < 1e-6);
        assert!((vignette_alpha(0.75, 80.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_zero_strength_is_noop() {
        let src = Bitmap::filled(9, 7, [200, 150, 100, 255]);
        assert_eq!(apply_vignette(&src, 0.0).unwrap(), src);
    }

    #[test]
    fn test_edges_darker_than_center() {
        let src = Bitmap::filled(21, 21, [200, 200, 200, 255]);
        let out = apply_vignette(&src, 100.0).unwrap();
        let center = out.get(10, 10).unwrap()[0];
        let edge = out.get(0, 10).unwrap()[0];
        let corner = out.get(0, 0).unwrap()[0];
        assert_eq!(center, 200);
        assert!(edge < center);
        assert!(corner <= edge);
    }

    #[test]
    fn test_full_strength_corner_is_black() {
        let src = Bitmap::filled(10, 10, [255, 255, 255, 255]);
        let out = apply_vignette(&src, 100.0).unwrap();
        // Corner pixel center is beyond the radius: alpha 1.0
        assert_eq!(out.get(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_longer_dimension_sets_radius() {
        // Radius is 20: the top edge is near the center, the left edge is not
        let src = Bitmap::filled(40, 10, [100, 100, 100, 255]);
        let out = apply_vignette(&src, 100.0).unwrap();
        let top_middle = out.get(20, 0).unwrap()[0];
        let left_middle = out.get(0, 5).unwrap()[0];
        assert!(top_middle > left_middle);
    }

    #[test]
    fn test_short_buffer_is_error() {
        let bad = Bitmap {
            width: 4,
            height: 4,
            pixels: vec![0; 8],
        };
        assert!(matches!(
            apply_vignette(&bad, 50.0),
            Err(EditError::InvalidPixelData {
                expected: 64,
                actual: 8
            })
        ));
    }
}
