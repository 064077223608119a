//! Geometric transform parameters.

use serde::{Deserialize, Serialize};

use crate::EditError;

pub const ROTATE_RANGE: (f32, f32) = (-180.0, 180.0);
pub const ZOOM_RANGE: (f32, f32) = (0.5, 3.0);

/// Rotation, flip and zoom applied around the canvas center.
///
/// `flip_h` / `flip_v` are sign multipliers (`1.0` or `-1.0`) so they
/// compose directly into the scale factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformSettings {
    /// Rotation in degrees (-180 to 180), positive = clockwise on screen
    pub rotate: f32,
    /// Horizontal flip multiplier (1 or -1)
    pub flip_h: f32,
    /// Vertical flip multiplier (1 or -1)
    pub flip_v: f32,
    /// Zoom factor (0.5 to 3.0)
    pub zoom: f32,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            rotate: 0.0,
            flip_h: 1.0,
            flip_v: 1.0,
            zoom: 1.0,
        }
    }
}

impl TransformSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the transform maps every pixel onto itself.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Set a transform field by its UI name (`rotate`, `flipH`, `flipV`, `zoom`).
    ///
    /// Rotation and zoom are clamped; flips store `-1` for negative input
    /// and `1` otherwise. Returns the value actually stored.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, EditError> {
        if !value.is_finite() {
            return Err(EditError::invalid(
                name,
                format!("value {value} is not finite"),
            ));
        }
        let slot = match name {
            "rotate" => {
                self.rotate = value.clamp(ROTATE_RANGE.0, ROTATE_RANGE.1);
                self.rotate
            }
            "zoom" => {
                self.zoom = value.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1);
                self.zoom
            }
            "flipH" | "flip_h" => {
                self.flip_h = flip_sign(value);
                self.flip_h
            }
            "flipV" | "flip_v" => {
                self.flip_v = flip_sign(value);
                self.flip_v
            }
            _ => return Err(EditError::invalid(name, "unknown transform field")),
        };
        Ok(slot)
    }

    /// Read a transform field by its UI name.
    pub fn get(&self, name: &str) -> Result<f32, EditError> {
        match name {
            "rotate" => Ok(self.rotate),
            "zoom" => Ok(self.zoom),
            "flipH" | "flip_h" => Ok(self.flip_h),
            "flipV" | "flip_v" => Ok(self.flip_v),
            _ => Err(EditError::invalid(name, "unknown transform field")),
        }
    }

    /// Mirror horizontally (what the "Flip H" button does).
    pub fn toggle_flip_h(&mut self) {
        self.flip_h = -self.flip_h;
    }

    /// Mirror vertically.
    pub fn toggle_flip_v(&mut self) {
        self.flip_v = -self.flip_v;
    }

    /// Reject out-of-range, non-finite, or non-unit flip values.
    pub fn validate(&self) -> Result<(), EditError> {
        check_range("rotate", self.rotate, ROTATE_RANGE)?;
        check_range("zoom", self.zoom, ZOOM_RANGE)?;
        check_flip("flipH", self.flip_h)?;
        check_flip("flipV", self.flip_v)
    }
}

fn flip_sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn check_range(name: &str, value: f32, (min, max): (f32, f32)) -> Result<(), EditError> {
    if !value.is_finite() || value < min || value > max {
        return Err(EditError::invalid(
            name,
            format!("value {value} outside {min}..={max}"),
        ));
    }
    Ok(())
}

fn check_flip(name: &str, value: f32) -> Result<(), EditError> {
    if value != 1.0 && value != -1.0 {
        return Err(EditError::invalid(
            name,
            format!("flip multiplier must be 1 or -1, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let t = TransformSettings::default();
        assert!(t.is_identity());
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_set_clamps_rotation_and_zoom() {
        let mut t = TransformSettings::new();
        assert_eq!(t.set("rotate", 270.0), Ok(180.0));
        assert_eq!(t.set("rotate", -400.0), Ok(-180.0));
        assert_eq!(t.set("zoom", 10.0), Ok(3.0));
        assert_eq!(t.set("zoom", 0.1), Ok(0.5));
    }

    #[test]
    fn test_set_flip_uses_sign() {
        let mut t = TransformSettings::new();
        assert_eq!(t.set("flipH", -0.3), Ok(-1.0));
        assert_eq!(t.set("flipV", 7.0), Ok(1.0));
        assert_eq!(t.set("flipV", 0.0), Ok(1.0));
    }

    #[test]
    fn test_set_unknown_and_non_finite() {
        let mut t = TransformSettings::new();
        assert!(t.set("skew", 1.0).is_err());
        assert!(t.set("zoom", f32::NAN).is_err());
        assert!(t.is_identity());
    }

    #[test]
    fn test_toggle_flips() {
        let mut t = TransformSettings::new();
        t.toggle_flip_h();
        assert_eq!(t.flip_h, -1.0);
        t.toggle_flip_h();
        assert_eq!(t.flip_h, 1.0);
        t.toggle_flip_v();
        assert_eq!(t.get("flipV"), Ok(-1.0));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut t = TransformSettings::default();
        t.flip_h = 0.5;
        assert!(t.validate().is_err());

        let mut t = TransformSettings::default();
        t.zoom = 0.0;
        assert!(t.validate().is_err());

        let mut t = TransformSettings::default();
        t.rotate = f32::INFINITY;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"rotate": 90, "flipH": -1, "zoom": 2}"#;
        let t: TransformSettings = serde_json::from_str(json).unwrap();
        assert_eq!(t.rotate, 90.0);
        assert_eq!(t.flip_h, -1.0);
        assert_eq!(t.flip_v, 1.0);
        assert_eq!(t.zoom, 2.0);
    }
}
