//! Export: render settings plus encode settings to a downloadable blob.

use tracing::debug;

use crate::encode::encode_bitmap;
use crate::pipeline::{render_with_options, RenderOptions};
use crate::settings::{ExportFormat, ExportSettings, FilterSettings, TransformSettings};
use crate::{Bitmap, EditError};

/// Filename stem used when the host has none.
pub const DEFAULT_FILENAME_STEM: &str = "edited-image";

/// Encoded image bytes tagged with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
}

impl ExportBlob {
    /// The MIME subtype, e.g. `jpeg` for `image/jpeg`.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// `{stem}.{extension}`, falling back to [`DEFAULT_FILENAME_STEM`] for
    /// a blank stem.
    pub fn suggested_filename(&self, stem: Option<&str>) -> String {
        let stem = stem
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FILENAME_STEM);
        format!("{}.{}", stem, self.extension())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode an already-rendered bitmap.
///
/// # Errors
///
/// * `EmptySource` if the bitmap has no pixels
/// * `InvalidPixelData` if the buffer doesn't match the dimensions
/// * `InvalidParameter` if the quality is outside 1-100
/// * `EncodingFailure` if the encoder rejects the data
pub fn export(bitmap: &Bitmap, settings: &ExportSettings) -> Result<ExportBlob, EditError> {
    if bitmap.is_empty() {
        return Err(EditError::EmptySource);
    }
    bitmap.validate()?;
    settings.validate()?;

    let bytes = encode_bitmap(bitmap, settings.format, settings.quality)?;
    Ok(ExportBlob {
        bytes,
        format: settings.format,
    })
}

/// Render `source` with the export preset, then encode it.
#[tracing::instrument(skip_all, fields(format = %export_settings.format))]
pub fn render_and_export(
    source: &Bitmap,
    filters: &FilterSettings,
    transform: &TransformSettings,
    export_settings: &ExportSettings,
) -> Result<ExportBlob, EditError> {
    export_settings.validate()?;
    let rendered = render_with_options(source, filters, transform, &RenderOptions::export())?;
    let blob = export(&rendered, export_settings)?;
    debug!(bytes = blob.len(), "export complete");
    Ok(blob)
}
