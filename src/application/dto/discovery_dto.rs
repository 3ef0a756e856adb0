//! Discovery DTOs.

use std::collections::HashSet;

use serde::Serialize;

/// How the final result set was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryStrategy {
    /// Candidates generated from the decoded seed validated.
    Pattern,
    /// Only the speculative next p-number candidates validated.
    PNumberFallback,
    /// Nothing was generated or validated except the seed itself.
    SeedOnly,
    /// Nothing validated.
    NotFound,
}

impl DiscoveryStrategy {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pattern => "decoded pattern",
            Self::PNumberFallback => "speculative p-number fallback",
            Self::SeedOnly => "seed url only",
            Self::NotFound => "no images found",
        }
    }
}

impl std::fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Discovery request data.
#[derive(Debug, Clone)]
pub struct DiscoveryRequest {
    /// The known-valid image URL to start from.
    pub seed_url: String,
}

impl DiscoveryRequest {
    /// Creates new discovery request.
    #[must_use]
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
        }
    }
}

/// Discovery response data.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResponse {
    /// Seed URL the discovery started from.
    pub seed_url: String,
    /// Every validated URL, deduplicated.
    pub urls: HashSet<String>,
    /// How the result was obtained.
    pub strategy: DiscoveryStrategy,
    /// Number of existence probes issued.
    pub probes_issued: usize,
}

impl DiscoveryResponse {
    /// Returns the validated URLs in lexical order.
    #[must_use]
    pub fn sorted_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.urls.iter().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
