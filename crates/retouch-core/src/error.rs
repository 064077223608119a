//! Error types surfaced by the parameter model and the render pipeline.

use thiserror::Error;

/// Errors returned at the public boundary of the core.
///
/// Validation errors are raised where the bad value enters: in a settings
/// `set` call, or at pipeline entry when a settings value was built by hand.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// A parameter name is unknown, or its value is out of range or non-finite.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The pipeline was invoked without any source pixels.
    #[error("No source bitmap supplied")]
    EmptySource,

    /// The bitmap could not be serialized to the requested format.
    #[error("Encoding failed: {0}")]
    EncodingFailure(String),

    /// Pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

impl EditError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
