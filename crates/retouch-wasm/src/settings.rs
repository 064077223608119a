//! Settings WASM bindings.
//!
//! JavaScript wrappers for the filter, transform and export settings. Every
//! setter clamps to the parameter's range the same way `set(name, value)`
//! does, and throws for non-finite values, keeping the previous value.

use retouch_core::settings::{ExportFormat, FilterCategory, FilterName};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Filter settings wrapper for JavaScript
#[wasm_bindgen]
pub struct FilterSettings {
    inner: retouch_core::FilterSettings,
}

#[wasm_bindgen]
impl FilterSettings {
    /// Create new filter settings with default values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: retouch_core::FilterSettings::new(),
        }
    }

    /// Set a filter by its UI name, returning the stored (clamped) value.
    ///
    /// Throws for unknown names and non-finite values.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, JsValue> {
        self.inner
            .set(name, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get a filter by its UI name.
    pub fn get(&self, name: &str) -> Result<f32, JsValue> {
        self.inner
            .get(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get brightness value
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Brightness, value)
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Contrast, value)
    }

    /// Get saturation value
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Saturation, value)
    }

    /// Get exposure value
    #[wasm_bindgen(getter)]
    pub fn exposure(&self) -> f32 {
        self.inner.exposure
    }

    /// Set exposure value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_exposure(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Exposure, value)
    }

    /// Get temperature value
    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> f32 {
        self.inner.temperature
    }

    /// Set temperature value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_temperature(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Temperature, value)
    }

    /// Get tint value
    #[wasm_bindgen(getter)]
    pub fn tint(&self) -> f32 {
        self.inner.tint
    }

    /// Set tint value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_tint(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Tint, value)
    }

    /// Get hue rotate value
    #[wasm_bindgen(getter = hueRotate)]
    pub fn hue_rotate(&self) -> f32 {
        self.inner.hue_rotate
    }

    /// Set hue rotate value (clamped)
    #[wasm_bindgen(setter = hueRotate)]
    pub fn set_hue_rotate(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::HueRotate, value)
    }

    /// Get sepia value
    #[wasm_bindgen(getter)]
    pub fn sepia(&self) -> f32 {
        self.inner.sepia
    }

    /// Set sepia value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_sepia(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Sepia, value)
    }

    /// Get grayscale value
    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f32 {
        self.inner.grayscale
    }

    /// Set grayscale value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Grayscale, value)
    }

    /// Get invert value
    #[wasm_bindgen(getter)]
    pub fn invert(&self) -> f32 {
        self.inner.invert
    }

    /// Set invert value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_invert(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Invert, value)
    }

    /// Get highlight value
    #[wasm_bindgen(getter)]
    pub fn highlight(&self) -> f32 {
        self.inner.highlight
    }

    /// Set highlight value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_highlight(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Highlight, value)
    }

    /// Get shadow value
    #[wasm_bindgen(getter)]
    pub fn shadow(&self) -> f32 {
        self.inner.shadow
    }

    /// Set shadow value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_shadow(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Shadow, value)
    }

    /// Get opacity value
    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f32 {
        self.inner.opacity
    }

    /// Set opacity value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_opacity(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Opacity, value)
    }

    /// Get blur value
    #[wasm_bindgen(getter)]
    pub fn blur(&self) -> f32 {
        self.inner.blur
    }

    /// Set blur value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_blur(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Blur, value)
    }

    /// Get sharpen value
    #[wasm_bindgen(getter)]
    pub fn sharpen(&self) -> f32 {
        self.inner.sharpen
    }

    /// Set sharpen value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_sharpen(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Sharpen, value)
    }

    /// Get vignette value
    #[wasm_bindgen(getter)]
    pub fn vignette(&self) -> f32 {
        self.inner.vignette
    }

    /// Set vignette value (clamped)
    #[wasm_bindgen(setter)]
    pub fn set_vignette(&mut self, value: f32) -> Result<(), JsValue> {
        self.store(FilterName::Vignette, value)
    }

    /// Check if all filters are at default values
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Restore every filter to its default
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Serialize to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JS object; missing fields take defaults.
    pub fn from_json(value: JsValue) -> Result<FilterSettings, JsValue> {
        let inner: retouch_core::FilterSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSettings {
    pub(crate) fn inner(&self) -> &retouch_core::FilterSettings {
        &self.inner
    }

    fn store(&mut self, name: FilterName, value: f32) -> Result<(), JsValue> {
        self.inner
            .set_filter(name, value)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Transform settings wrapper for JavaScript
#[wasm_bindgen]
pub struct TransformSettings {
    inner: retouch_core::TransformSettings,
}

#[wasm_bindgen]
impl TransformSettings {
    /// Create new transform settings (no rotation, no flip, zoom 1)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: retouch_core::TransformSettings::new(),
        }
    }

    /// Set `rotate`, `zoom`, `flipH` or `flipV`, returning the stored value.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, JsValue> {
        self.inner
            .set(name, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<f32, JsValue> {
        self.inner
            .get(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Rotation in degrees, clockwise
    #[wasm_bindgen(getter)]
    pub fn rotate(&self) -> f32 {
        self.inner.rotate
    }

    #[wasm_bindgen(setter)]
    pub fn set_rotate(&mut self, value: f32) -> Result<(), JsValue> {
        self.set("rotate", value).map(|_| ())
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 {
        self.inner.zoom
    }

    #[wasm_bindgen(setter)]
    pub fn set_zoom(&mut self, value: f32) -> Result<(), JsValue> {
        self.set("zoom", value).map(|_| ())
    }

    /// Horizontal flip factor: 1 or -1
    #[wasm_bindgen(getter = flipH)]
    pub fn flip_h(&self) -> f32 {
        self.inner.flip_h
    }

    /// Vertical flip factor: 1 or -1
    #[wasm_bindgen(getter = flipV)]
    pub fn flip_v(&self) -> f32 {
        self.inner.flip_v
    }

    /// Mirror left-right (the UI's flip button)
    pub fn toggle_flip_h(&mut self) {
        self.inner.toggle_flip_h();
    }

    /// Mirror top-bottom
    pub fn toggle_flip_v(&mut self) {
        self.inner.toggle_flip_v();
    }

    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn from_json(value: JsValue) -> Result<TransformSettings, JsValue> {
        let inner: retouch_core::TransformSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSettings {
    pub(crate) fn inner(&self) -> &retouch_core::TransformSettings {
        &self.inner
    }
}

/// Export settings wrapper for JavaScript
#[wasm_bindgen]
pub struct ExportSettings {
    inner: retouch_core::ExportSettings,
}

#[wasm_bindgen]
impl ExportSettings {
    /// PNG at quality 92
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: retouch_core::ExportSettings::default(),
        }
    }

    /// MIME type of the selected format, e.g. `image/png`
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format.mime_type().to_string()
    }

    /// Select a format by MIME type (`image/webp`) or extension (`jpg`).
    pub fn set_format(&mut self, format: &str) -> Result<(), JsValue> {
        self.inner.format = format
            .parse::<ExportFormat>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Quality 1-100, used by JPEG
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.inner.quality
    }

    /// Set quality, rounded and clamped to 1-100. Throws for NaN.
    #[wasm_bindgen(setter)]
    pub fn set_quality(&mut self, value: f64) -> Result<(), JsValue> {
        self.inner
            .set_quality_value(value)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Filename extension for the selected format
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.format.extension().to_string()
    }

    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn from_json(value: JsValue) -> Result<ExportSettings, JsValue> {
        let inner: retouch_core::ExportSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSettings {
    pub(crate) fn inner(&self) -> &retouch_core::ExportSettings {
        &self.inner
    }
}

/// One slider group in the editor panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFilterCategory {
    label: &'static str,
    filters: Vec<&'static str>,
}

fn category_table() -> Vec<JsFilterCategory> {
    FilterCategory::ALL
        .iter()
        .map(|category| JsFilterCategory {
            label: category.label(),
            filters: category.filters().map(FilterName::as_str).collect(),
        })
        .collect()
}

/// Every filter's name, range, default and category, as an array of
/// plain objects for building sliders.
#[wasm_bindgen]
pub fn filter_descriptors() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&retouch_core::filter_descriptors())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Slider groups in display order: `[{ label, filters: [name, ...] }]`.
#[wasm_bindgen]
pub fn filter_categories() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&category_table()).map_err(|e| JsValue::from_str(&e.to_string()))
}
