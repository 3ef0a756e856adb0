//! URL codec error types.

use thiserror::Error;

/// Reasons a URL component could not be parsed.
///
/// The public decoder reports a mismatch as `None`; these variants carry the
/// detail into debug logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CodecError {
    #[error("url does not match the product image layout")]
    PatternMismatch,

    #[error("unknown image type: {value}")]
    UnknownImageType { value: String },

    #[error("invalid resolution segment: {value}")]
    InvalidResolution { value: String },
}

impl CodecError {
    /// Creates unknown image type error.
    #[must_use]
    pub fn unknown_image_type(value: impl Into<String>) -> Self {
        Self::UnknownImageType {
            value: value.into(),
        }
    }

    /// Creates invalid resolution error.
    #[must_use]
    pub fn invalid_resolution(value: impl Into<String>) -> Self {
        Self::InvalidResolution {
            value: value.into(),
        }
    }
}
