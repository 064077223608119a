//! Output format and quality selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EditError;

pub const DEFAULT_QUALITY: u8 = 92;

/// Raster formats the export stage can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::Webp,
        ExportFormat::Gif,
    ];

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
            ExportFormat::Gif => "image/gif",
        }
    }

    /// Filename extension: the MIME subtype (`image/jpeg` -> `jpeg`).
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
            ExportFormat::Gif => "gif",
        }
    }

    /// Whether the encoder for this format honors the quality setting.
    ///
    /// Only JPEG does: the WebP encoder available here is lossless.
    pub fn uses_quality(self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

impl FromStr for ExportFormat {
    type Err = EditError;

    /// Accepts a MIME type (`image/webp`) or a bare extension (`webp`, `jpg`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let subtype = lower.strip_prefix("image/").unwrap_or(&lower);
        match subtype {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "webp" => Ok(ExportFormat::Webp),
            "gif" => Ok(ExportFormat::Gif),
            _ => Err(EditError::invalid("format", format!("unsupported format `{s}`"))),
        }
    }
}

/// Format and quality for the export encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// Quality 1-100, ignored by lossless formats
    pub quality: u8,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ExportSettings {
    pub fn new(format: ExportFormat, quality: u8) -> Self {
        Self { format, quality }
    }

    /// Store `quality` clamped to 1..=100 and return the stored value.
    pub fn set_quality(&mut self, quality: i64) -> u8 {
        self.quality = quality.clamp(1, 100) as u8;
        self.quality
    }

    /// Store a UI-supplied quality, rounded and clamped to 1..=100.
    ///
    /// Non-finite input is rejected and the stored value is kept.
    pub fn set_quality_value(&mut self, quality: f64) -> Result<u8, EditError> {
        if !quality.is_finite() {
            return Err(EditError::invalid(
                "quality",
                format!("value {quality} is not finite"),
            ));
        }
        Ok(self.set_quality(quality.round().clamp(1.0, 100.0) as i64))
    }

    pub fn validate(&self) -> Result<(), EditError> {
        if !(1..=100).contains(&self.quality) {
            return Err(EditError::invalid(
                "quality",
                format!("value {} outside 1..=100", self.quality),
            ));
        }
        Ok(())
    }
}
