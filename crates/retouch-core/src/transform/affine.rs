//! 2D affine matrices in canvas convention.
//!
//! A point maps as:
//! ```text
//! x' = a*x + c*y + e
//! y' = b*x + d*y + f
//! ```
//! with y pointing down, so a positive rotation turns clockwise on screen.

use crate::settings::TransformSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// `self * inner`: apply `inner` first, then `self`.
    ///
    /// Chaining `t.then_apply(x)` mirrors successive canvas calls, where each
    /// new call acts on coordinates before the ones already set.
    pub fn then_apply(&self, inner: &Affine) -> Affine {
        Affine {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    /// Inverse matrix, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < 1e-12 || !det.is_finite() {
            return None;
        }
        Some(Affine {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Build the editor's transform for a `width` x `height` canvas:
/// translate to center, rotate, scale by `(flip_h * zoom, flip_v * zoom)`,
/// translate back.
pub fn canvas_transform(width: u32, height: u32, settings: &TransformSettings) -> Affine {
    if settings.is_identity() {
        return Affine::IDENTITY;
    }
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let zoom = settings.zoom as f64;
    let radians = (settings.rotate as f64) * std::f64::consts::PI / 180.0;

    Affine::translate(cx, cy)
        .then_apply(&Affine::rotate(radians))
        .then_apply(&Affine::scale(
            settings.flip_h as f64 * zoom,
            settings.flip_v as f64 * zoom,
        ))
        .then_apply(&Affine::translate(-cx, -cy))
}
