//! HTTP-backed existence probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, trace};

use crate::domain::errors::ProbeError;
use crate::domain::ports::ExistenceProbePort;

/// Time allowed for a single probe, including the body.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 4000;

/// Browser-like user agent; the image host rejects bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP probe.
#[derive(Debug, Clone)]
pub struct HttpProbeConfig {
    /// Probe timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for HttpProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Checks image existence by fetching it over HTTP.
///
/// A URL exists when the response is 2xx, any declared content type is not a
/// text or HTML document, and the whole body arrives before the timeout.
pub struct HttpImageProbe {
    client: Client,
    timeout_ms: u64,
}

impl std::fmt::Debug for HttpImageProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageProbe")
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl HttpImageProbe {
    /// Creates a probe with default configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_config(&HttpProbeConfig::default())
    }

    /// Creates a probe with the given configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &HttpProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ProbeError::client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Fetches the URL and reports why it does not count as a loaded image.
    ///
    /// # Errors
    /// Returns `ProbeError` for transport failures, non-success statuses,
    /// document content types, body read failures and timeouts.
    pub async fn check(&self, url: &str) -> Result<(), ProbeError> {
        let deadline = Duration::from_millis(self.timeout_ms);
        match tokio::time::timeout(deadline, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout {
                timeout_ms: self.timeout_ms,
            }),
        }
    }

    async fn fetch(&self, url: &str) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "image/*")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else if e.is_connect() {
                    ProbeError::network("failed to connect to image host")
                } else {
                    ProbeError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::status(status.as_u16()));
        }

        if let Some(content_type) = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if is_document_content_type(content_type) {
                return Err(ProbeError::NotAnImage {
                    content_type: content_type.to_string(),
                });
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProbeError::body(e.to_string()))?;

        trace!(url, bytes = body.len(), "Image body received");
        Ok(())
    }
}

#[async_trait]
impl ExistenceProbePort for HttpImageProbe {
    async fn probe(&self, url: &str) -> bool {
        match self.check(url).await {
            Ok(()) => true,
            Err(e) => {
                if e.is_definitive() {
                    trace!(url, error = %e, "Image missing");
                } else {
                    debug!(url, error = %e, "Probe failed");
                }
                false
            }
        }
    }
}

/// Error pages served with 200 come back as text or HTML; anything binary
/// would still load in a browser.
fn is_document_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime.contains("html")
}
