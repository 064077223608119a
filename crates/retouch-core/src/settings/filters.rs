//! Filter parameters with their declared ranges and defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EditError;

/// Every adjustable filter, in UI order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterName {
    Brightness,
    Contrast,
    Saturation,
    Exposure,
    Temperature,
    Tint,
    HueRotate,
    Sepia,
    Grayscale,
    Invert,
    Highlight,
    Shadow,
    Opacity,
    Blur,
    Sharpen,
    Vignette,
}

impl FilterName {
    pub const ALL: [FilterName; 16] = [
        FilterName::Brightness,
        FilterName::Contrast,
        FilterName::Saturation,
        FilterName::Exposure,
        FilterName::Temperature,
        FilterName::Tint,
        FilterName::HueRotate,
        FilterName::Sepia,
        FilterName::Grayscale,
        FilterName::Invert,
        FilterName::Highlight,
        FilterName::Shadow,
        FilterName::Opacity,
        FilterName::Blur,
        FilterName::Sharpen,
        FilterName::Vignette,
    ];

    /// Name as used by the UI layer (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::Brightness => "brightness",
            FilterName::Contrast => "contrast",
            FilterName::Saturation => "saturation",
            FilterName::Exposure => "exposure",
            FilterName::Temperature => "temperature",
            FilterName::Tint => "tint",
            FilterName::HueRotate => "hueRotate",
            FilterName::Sepia => "sepia",
            FilterName::Grayscale => "grayscale",
            FilterName::Invert => "invert",
            FilterName::Highlight => "highlight",
            FilterName::Shadow => "shadow",
            FilterName::Opacity => "opacity",
            FilterName::Blur => "blur",
            FilterName::Sharpen => "sharpen",
            FilterName::Vignette => "vignette",
        }
    }

    /// Inclusive `(min, max)` range.
    pub fn range(self) -> (f32, f32) {
        match self {
            FilterName::Brightness
            | FilterName::Contrast
            | FilterName::Saturation
            | FilterName::Exposure
            | FilterName::Highlight
            | FilterName::Shadow => (0.0, 200.0),
            FilterName::Temperature | FilterName::Tint => (-100.0, 100.0),
            FilterName::HueRotate => (0.0, 360.0),
            FilterName::Sepia
            | FilterName::Grayscale
            | FilterName::Invert
            | FilterName::Opacity
            | FilterName::Sharpen
            | FilterName::Vignette => (0.0, 100.0),
            FilterName::Blur => (0.0, 20.0),
        }
    }

    /// Value that leaves the image unchanged.
    pub fn default_value(self) -> f32 {
        match self {
            FilterName::Brightness
            | FilterName::Contrast
            | FilterName::Saturation
            | FilterName::Exposure
            | FilterName::Highlight
            | FilterName::Shadow
            | FilterName::Opacity => 100.0,
            _ => 0.0,
        }
    }

    pub fn category(self) -> FilterCategory {
        match self {
            FilterName::Brightness
            | FilterName::Contrast
            | FilterName::Saturation
            | FilterName::Exposure => FilterCategory::BasicAdjustments,
            FilterName::Temperature
            | FilterName::Tint
            | FilterName::HueRotate
            | FilterName::Sepia
            | FilterName::Grayscale
            | FilterName::Invert => FilterCategory::ColorEffects,
            FilterName::Highlight | FilterName::Shadow | FilterName::Opacity => {
                FilterCategory::LightAndShadow
            }
            FilterName::Blur | FilterName::Sharpen | FilterName::Vignette => {
                FilterCategory::Effects
            }
        }
    }

    /// Clamp `value` into this filter's range.
    ///
    /// Non-finite values are rejected rather than clamped.
    pub fn clamp(self, value: f32) -> Result<f32, EditError> {
        if !value.is_finite() {
            return Err(EditError::invalid(
                self.as_str(),
                format!("value {value} is not finite"),
            ));
        }
        let (min, max) = self.range();
        Ok(value.clamp(min, max))
    }

    /// Check `value` against this filter's range without modifying it.
    pub fn check(self, value: f32) -> Result<(), EditError> {
        let (min, max) = self.range();
        if !value.is_finite() || value < min || value > max {
            return Err(EditError::invalid(
                self.as_str(),
                format!("value {value} outside {min}..={max}"),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = EditError;

    /// Accepts the UI's camelCase names plus snake_case aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "hue_rotate" {
            return Ok(FilterName::HueRotate);
        }
        FilterName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| EditError::invalid(s, "unknown filter"))
    }
}

/// Grouping used to lay out slider panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    BasicAdjustments,
    ColorEffects,
    LightAndShadow,
    Effects,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::BasicAdjustments,
        FilterCategory::ColorEffects,
        FilterCategory::LightAndShadow,
        FilterCategory::Effects,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::BasicAdjustments => "Basic Adjustments",
            FilterCategory::ColorEffects => "Color Effects",
            FilterCategory::LightAndShadow => "Light & Shadow",
            FilterCategory::Effects => "Effects",
        }
    }

    /// Filters in this category, in UI order.
    pub fn filters(self) -> impl Iterator<Item = FilterName> {
        FilterName::ALL
            .into_iter()
            .filter(move |name| name.category() == self)
    }
}

/// Static description of one filter, for input-widget generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescriptor {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub category: &'static str,
}

/// Descriptors for every filter, in UI order.
pub fn filter_descriptors() -> Vec<FilterDescriptor> {
    FilterName::ALL
        .iter()
        .map(|&name| {
            let (min, max) = name.range();
            FilterDescriptor {
                name: name.as_str(),
                min,
                max,
                default: name.default_value(),
                category: name.category().label(),
            }
        })
        .collect()
}

/// Current filter values for an editing session.
///
/// Fields are public for direct construction; the pipeline re-validates
/// them on entry. Use [`FilterSettings::set`] to get clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSettings {
    /// Brightness percentage (0 to 200)
    pub brightness: f32,
    /// Contrast percentage (0 to 200)
    pub contrast: f32,
    /// Saturation percentage (0 to 200)
    pub saturation: f32,
    /// Exposure percentage (0 to 200)
    pub exposure: f32,
    /// Warm/cool wash (-100 to 100)
    pub temperature: f32,
    /// Magenta/green wash (-100 to 100)
    pub tint: f32,
    /// Hue rotation in degrees (0 to 360)
    pub hue_rotate: f32,
    /// Sepia amount (0 to 100)
    pub sepia: f32,
    /// Grayscale amount (0 to 100)
    pub grayscale: f32,
    /// Inversion amount (0 to 100)
    pub invert: f32,
    /// Highlight gain percentage (0 to 200)
    pub highlight: f32,
    /// Shadow gain percentage (0 to 200)
    pub shadow: f32,
    /// Opacity percentage (0 to 100)
    pub opacity: f32,
    /// Gaussian blur std-dev in pixels (0 to 20)
    pub blur: f32,
    /// Unsharp mask amount (0 to 100)
    pub sharpen: f32,
    /// Vignette strength (0 to 100)
    pub vignette: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            exposure: 100.0,
            temperature: 0.0,
            tint: 0.0,
            hue_rotate: 0.0,
            sepia: 0.0,
            grayscale: 0.0,
            invert: 0.0,
            highlight: 100.0,
            shadow: 100.0,
            opacity: 100.0,
            blur: 0.0,
            sharpen: 0.0,
            vignette: 0.0,
        }
    }
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Restore every filter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set a filter by its UI name, clamping to the declared range.
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, EditError> {
        let name: FilterName = name.parse()?;
        self.set_filter(name, value)
    }

    /// Typed variant of [`FilterSettings::set`].
    pub fn set_filter(&mut self, name: FilterName, value: f32) -> Result<f32, EditError> {
        let clamped = name.clamp(value)?;
        *self.slot_mut(name) = clamped;
        Ok(clamped)
    }

    /// Read a filter by its UI name.
    pub fn get(&self, name: &str) -> Result<f32, EditError> {
        let name: FilterName = name.parse()?;
        Ok(self.value(name))
    }

    /// Read a filter by name.
    pub fn value(&self, name: FilterName) -> f32 {
        match name {
            FilterName::Brightness => self.brightness,
            FilterName::Contrast => self.contrast,
            FilterName::Saturation => self.saturation,
            FilterName::Exposure => self.exposure,
            FilterName::Temperature => self.temperature,
            FilterName::Tint => self.tint,
            FilterName::HueRotate => self.hue_rotate,
            FilterName::Sepia => self.sepia,
            FilterName::Grayscale => self.grayscale,
            FilterName::Invert => self.invert,
            FilterName::Highlight => self.highlight,
            FilterName::Shadow => self.shadow,
            FilterName::Opacity => self.opacity,
            FilterName::Blur => self.blur,
            FilterName::Sharpen => self.sharpen,
            FilterName::Vignette => self.vignette,
        }
    }

    fn slot_mut(&mut self, name: FilterName) -> &mut f32 {
        match name {
            FilterName::Brightness => &mut self.brightness,
            FilterName::Contrast => &mut self.contrast,
            FilterName::Saturation => &mut self.saturation,
            FilterName::Exposure => &mut self.exposure,
            FilterName::Temperature => &mut self.temperature,
            FilterName::Tint => &mut self.tint,
            FilterName::HueRotate => &mut self.hue_rotate,
            FilterName::Sepia => &mut self.sepia,
            FilterName::Grayscale => &mut self.grayscale,
            FilterName::Invert => &mut self.invert,
            FilterName::Highlight => &mut self.highlight,
            FilterName::Shadow => &mut self.shadow,
            FilterName::Opacity => &mut self.opacity,
            FilterName::Blur => &mut self.blur,
            FilterName::Sharpen => &mut self.sharpen,
            FilterName::Vignette => &mut self.vignette,
        }
    }

    /// Reject any value that is out of range or non-finite.
    pub fn validate(&self) -> Result<(), EditError> {
        FilterName::ALL
            .iter()
            .try_for_each(|&name| name.check(self.value(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_table() {
        let settings = FilterSettings::default();
        for name in FilterName::ALL {
            assert_eq!(settings.value(name), name.default_value(), "{name}");
        }
        assert!(settings.is_default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_set_clamps_high() {
        let mut settings = FilterSettings::new();
        assert_eq!(settings.set("brightness", 500.0), Ok(200.0));
        assert_eq!(settings.brightness, 200.0);
    }

    #[test]
    fn test_set_clamps_low() {
        let mut settings = FilterSettings::new();
        assert_eq!(settings.set("brightness", -50.0), Ok(0.0));
        assert_eq!(settings.brightness, 0.0);
    }

    #[test]
    fn test_set_signed_range() {
        let mut settings = FilterSettings::new();
        assert_eq!(settings.set("temperature", -250.0), Ok(-100.0));
        assert_eq!(settings.set("tint", 42.0), Ok(42.0));
    }

    #[test]
    fn test_set_unknown_name() {
        let mut settings = FilterSettings::new();
        let err = settings.set("clarity", 10.0).unwrap_err();
        assert!(matches!(err, EditError::InvalidParameter { ref name, .. } if name == "clarity"));
        assert!(settings.is_default());
    }

    #[test]
    fn test_set_rejects_nan() {
        let mut settings = FilterSettings::new();
        assert!(settings.set("contrast", f32::NAN).is_err());
        assert!(settings.set("contrast", f32::INFINITY).is_err());
        assert_eq!(settings.contrast, 100.0);
    }

    #[test]
    fn test_hue_rotate_aliases() {
        let mut settings = FilterSettings::new();
        settings.set("hueRotate", 90.0).unwrap();
        assert_eq!(settings.get("hue_rotate"), Ok(90.0));
    }

    #[test]
    fn test_validate_catches_raw_fields() {
        let mut settings = FilterSettings::default();
        settings.blur = 25.0;
        assert!(settings.validate().is_err());

        settings.blur = 5.0;
        settings.opacity = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_reset() {
        let mut settings = FilterSettings::new();
        settings.set("sepia", 40.0).unwrap();
        assert!(!settings.is_default());
        settings.reset();
        assert!(settings.is_default());
    }

    #[test]
    fn test_categories_cover_every_filter_once() {
        let total: usize = FilterCategory::ALL.iter().map(|c| c.filters().count()).sum();
        assert_eq!(total, FilterName::ALL.len());

        let effects: Vec<_> = FilterCategory::Effects.filters().collect();
        assert_eq!(
            effects,
            vec![FilterName::Blur, FilterName::Sharpen, FilterName::Vignette]
        );
    }

    #[test]
    fn test_descriptors() {
        let descriptors = filter_descriptors();
        assert_eq!(descriptors.len(), 16);
        let hue = descriptors.iter().find(|d| d.name == "hueRotate").unwrap();
        assert_eq!((hue.min, hue.max, hue.default), (0.0, 360.0, 0.0));
        assert_eq!(hue.category, "Color Effects");
    }

    #[test]
    fn test_json_uses_ui_names() {
        let mut settings = FilterSettings::default();
        settings.hue_rotate = 45.0;
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["hueRotate"], 45.0);

        // Missing fields fall back to defaults.
        let parsed: FilterSettings = serde_json::from_str(r#"{"sepia": 30}"#).unwrap();
        assert_eq!(parsed.sepia, 30.0);
        assert_eq!(parsed.brightness, 100.0);
    }
}
