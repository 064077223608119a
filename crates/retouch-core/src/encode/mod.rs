//! Bitmap encoding for export.
//!
//! This module serializes an RGBA [`Bitmap`] to one of the supported
//! download formats using the `image` crate's encoders:
//! - PNG (lossless, alpha kept)
//! - JPEG (alpha flattened over black, quality 1-100)
//! - WEBP (lossless, alpha kept)
//! - GIF (palette-quantized, alpha kept as a transparent index)
//!
//! All operations are synchronous and single-threaded.

mod gif;
mod jpeg;
mod png;
mod webp;

pub use self::gif::encode_gif;
pub use self::jpeg::{encode_jpeg, flatten_over_black};
pub use self::png::encode_png;
pub use self::webp::encode_webp;

use thiserror::Error;
use tracing::debug;

use crate::bitmap::byte_len;
use crate::settings::ExportFormat;
use crate::{Bitmap, EditError};

/// Errors that can occur while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ExportFormat,
        message: String,
    },
}

impl From<EncodeError> for EditError {
    fn from(err: EncodeError) -> Self {
        EditError::EncodingFailure(err.to_string())
    }
}

/// Encode `bitmap` in `format`.
///
/// # Arguments
///
/// * `bitmap` - RGBA source
/// * `format` - Target format
/// * `quality` - 1-100, used by JPEG only
pub fn encode_bitmap(
    bitmap: &Bitmap,
    format: ExportFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    check_bitmap(bitmap)?;

    let bytes = match format {
        ExportFormat::Png => encode_png(bitmap)?,
        ExportFormat::Jpeg => encode_jpeg(bitmap, quality)?,
        ExportFormat::Webp => encode_webp(bitmap)?,
        ExportFormat::Gif => encode_gif(bitmap)?,
    };

    debug!(
        %format,
        width = bitmap.width,
        height = bitmap.height,
        bytes = bytes.len(),
        "encoded bitmap"
    );
    Ok(bytes)
}

/// Validate dimensions and buffer length before handing off to an encoder.
pub(crate) fn check_bitmap(bitmap: &Bitmap) -> Result<(), EncodeError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let expected = byte_len(bitmap.width, bitmap.height);
    if bitmap.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: bitmap.pixels.len(),
        });
    }
    Ok(())
}

pub(crate) fn failed(format: ExportFormat, err: impl ToString) -> EncodeError {
    EncodeError::EncodingFailed {
        format,
        message: err.to_string(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| Bitmap::new(w, h, pixels).unwrap())
        })
    }

    fn format_strategy() -> impl Strategy<Value = ExportFormat> {
        prop::sample::select(ExportFormat::ALL.to_vec())
    }

    proptest! {
        /// Property: every valid bitmap encodes in every format.
        #[test]
        fn prop_encode_always_succeeds(
            img in bitmap_strategy(),
            format in format_strategy(),
            quality in 1u8..=100,
        ) {
            let bytes = encode_bitmap(&img, format, quality);
            prop_assert!(bytes.is_ok());
            prop_assert!(!bytes.unwrap().is_empty());
        }

        /// Property: encoding is deterministic.
        #[test]
        fn prop_encode_deterministic(img in bitmap_strategy(), format in format_strategy()) {
            let a = encode_bitmap(&img, format, 80).unwrap();
            let b = encode_bitmap(&img, format, 80).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
