//! Existence probe error types.

use thiserror::Error;

/// Probe failure variants.
///
/// Never crosses the probe port: every variant collapses to "does not exist".
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("not an image: content type {content_type}")]
    NotAnImage { content_type: String },

    #[error("failed to read body: {message}")]
    Body { message: String },

    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

impl ProbeError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates body read error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns whether the host answered and said no.
    #[must_use]
    pub const fn is_definitive(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::NotAnImage { .. })
    }
}
