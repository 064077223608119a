//! Crop preprocessing.
//!
//! The render pipeline takes an already-cropped source. Hosts that have
//! no cropping facility of their own can use [`apply_crop`] before calling
//! the pipeline. Crop parameters are normalized (0.0 to 1.0), making them
//! independent of the actual image dimensions.
//!
//! # Coordinate System
//!
//! - (0.0, 0.0) = top-left corner
//! - (1.0, 1.0) = bottom-right corner
//! - width/height are relative to original dimensions

use crate::bitmap::CHANNELS;
use crate::{Bitmap, EditError};

/// Crop a bitmap using normalized coordinates.
///
/// # Behavior
///
/// - Coordinates beyond the image bounds are clamped
/// - Minimum output dimension is 1x1 pixels
/// - Full crop (0, 0, 1, 1) returns a copy of the original image
///
/// # Errors
///
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
pub fn apply_crop(
    image: &Bitmap,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Result<Bitmap, EditError> {
    image.validate()?;

    // Fast path: full crop returns a clone
    if left <= 0.0 && top <= 0.0 && width >= 1.0 && height >= 1.0 {
        return Ok(image.clone());
    }
    if image.is_empty() {
        return Ok(image.clone());
    }

    let src_w = image.width as f64;
    let src_h = image.height as f64;

    let px_left = (left.clamp(0.0, 1.0) * src_w).round() as u32;
    let px_top = (top.clamp(0.0, 1.0) * src_h).round() as u32;
    let px_width = (width.clamp(0.0, 1.0) * src_w).round() as u32;
    let px_height = (height.clamp(0.0, 1.0) * src_h).round() as u32;

    let px_left = px_left.min(image.width - 1);
    let px_top = px_top.min(image.height - 1);
    let px_right = (px_left + px_width).min(image.width);
    let px_bottom = (px_top + px_height).min(image.height);

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let row_bytes = out_width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Rows are contiguous in both buffers
    for y in px_top..px_top + out_height {
        let start = image.index(px_left, y);
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(Bitmap {
        width: out_width,
        height: out_height,
        pixels: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image where each pixel encodes its coordinates.
    fn coord_image(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        Bitmap::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_full_crop_is_copy() {
        let img = coord_image(10, 8);
        assert_eq!(apply_crop(&img, 0.0, 0.0, 1.0, 1.0).unwrap(), img);
    }

    #[test]
    fn test_center_crop() {
        let img = coord_image(100, 100);
        let out = apply_crop(&img, 0.25, 0.25, 0.5, 0.5).unwrap();
        assert_eq!((out.width, out.height), (50, 50));
        assert_eq!(out.get(0, 0), Some([25, 25, 0, 255]));
        assert_eq!(out.get(49, 49), Some([74, 74, 0, 255]));
    }

    #[test]
    fn test_crop_non_square() {
        let img = coord_image(200, 100);
        let out = apply_crop(&img, 0.0, 0.0, 0.5, 1.0).unwrap();
        assert_eq!((out.width, out.height), (100, 100));
    }

    #[test]
    fn test_crop_clamps_overflow() {
        let img = coord_image(10, 10);
        let out = apply_crop(&img, 0.8, 0.8, 0.5, 0.5).unwrap();
        assert_eq!((out.width, out.height), (2, 2));
        assert_eq!(out.get(1, 1), Some([9, 9, 0, 255]));
    }

    #[test]
    fn test_crop_minimum_size() {
        let img = coord_image(10, 10);
        let out = apply_crop(&img, 0.5, 0.5, 0.0, 0.0).unwrap();
        assert_eq!((out.width, out.height), (1, 1));
        assert_eq!(out.pixels.len(), 4);
    }

    #[test]
    fn test_crop_empty_image() {
        let img = Bitmap::new(0, 0, vec![]).unwrap();
        assert!(apply_crop(&img, 0.1, 0.1, 0.5, 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_short_buffer_is_error() {
        let bad = Bitmap {
            width: 4,
            height: 4,
            pixels: vec![0; 8],
        };
        let err = apply_crop(&bad, 0.5, 0.5, 0.5, 0.5).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidPixelData {
                expected: 64,
                actual: 8
            }
        );
    }
}
