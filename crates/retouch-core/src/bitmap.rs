//! RGBA8 pixel buffer shared by every pipeline stage.

use crate::EditError;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A rectangular RGBA8 pixel buffer.
///
/// Pixels are stored row-major, non-premultiplied, 4 bytes per pixel.
/// Pipeline stages borrow their input and return a freshly allocated
/// `Bitmap`, so a caller's source is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order.
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap, checking that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditError> {
        let bitmap = Self {
            width,
            height,
            pixels,
        };
        bitmap.validate()?;
        Ok(bitmap)
    }

    /// Check that the buffer length matches the dimensions.
    ///
    /// Stages that index pixels by coordinate call this first.
    pub fn validate(&self) -> Result<(), EditError> {
        let expected = byte_len(self.width, self.height);
        if self.pixels.len() != expected {
            return Err(EditError::InvalidPixelData {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Create a bitmap where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a bitmap from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// RGBA value at `(x, y)`, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let px = self.pixels.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// A bitmap of the same size whose pixels are produced by `f`.
    pub(crate) fn map_pixels(&self, mut f: impl FnMut(&[u8], &mut [u8])) -> Bitmap {
        let mut out = vec![0u8; self.pixels.len()];
        for (src, dst) in self
            .pixels
            .chunks_exact(CHANNELS)
            .zip(out.chunks_exact_mut(CHANNELS))
        {
            f(src, dst);
        }
        Bitmap {
            width: self.width,
            height: self.height,
            pixels: out,
        }
    }
}

/// Expected buffer length for the given dimensions.
pub(crate) fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}
