//! Geometric transform stage and crop preprocessing.
//!
//! The editor's transform is built the way a 2D canvas context is driven:
//! translate to the center, rotate, scale by the flip/zoom factors,
//! translate back. The filtered bitmap is then resampled through that
//! transform into an output of the same size.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Origin is the top-left corner, y grows downward
//! - Crop coordinates are normalized (0.0 to 1.0)

mod affine;
mod crop;
mod resample;

pub use affine::{canvas_transform, Affine};
pub use crop::apply_crop;
pub use resample::{apply_affine, InterpolationFilter};

use crate::settings::TransformSettings;
use crate::{Bitmap, EditError};

/// Apply the editor transform to `image`, keeping its dimensions.
///
/// # Errors
///
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
pub fn apply_transform(
    image: &Bitmap,
    settings: &TransformSettings,
    filter: InterpolationFilter,
    background: [u8; 4],
) -> Result<Bitmap, EditError> {
    let transform = canvas_transform(image.width, image.height, settings);
    apply_affine(image, &transform, filter, background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_is_identity() {
        let pixels: Vec<u8> = (0..7 * 5 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let img = Bitmap::new(7, 5, pixels).unwrap();
        let out = apply_transform(
            &img,
            &TransformSettings::default(),
            InterpolationFilter::Lanczos3,
            [0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_double_flip_h_restores_image() {
        let mut pixels: Vec<u8> = (0..6 * 4 * 4).map(|i| (i * 13 % 256) as u8).collect();
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
        let img = Bitmap::new(6, 4, pixels).unwrap();
        let mut settings = TransformSettings::default();
        settings.toggle_flip_h();
        let filter = InterpolationFilter::Bilinear;
        let once = apply_transform(&img, &settings, filter, [0; 4]).unwrap();
        let twice = apply_transform(&once, &settings, filter, [0; 4]).unwrap();
        assert_ne!(once, img);
        assert_eq!(twice, img);
    }

    #[test]
    fn test_short_buffer_is_error() {
        let bad = Bitmap {
            width: 4,
            height: 4,
            pixels: vec![0; 8],
        };
        let mut settings = TransformSettings::default();
        settings.rotate = 45.0;
        let err = apply_transform(&bad, &settings, InterpolationFilter::Lanczos3, [0; 4]);
        assert!(matches!(
            err,
            Err(EditError::InvalidPixelData {
                expected: 64,
                actual: 8
            })
        ));
    }
}
