//! Discovery progress entities.

use serde::Serialize;

/// Phase of discovery in which an image was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbePhase {
    /// Low indices checked first.
    Priority,
    /// Remaining indices checked after the priority phase settles.
    Secondary,
    /// Speculative retry with the next p-number.
    PNumberFallback,
    /// The seed URL itself.
    Seed,
}

impl std::fmt::Display for ProbePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Secondary => write!(f, "secondary"),
            Self::PNumberFallback => write!(f, "p-number fallback"),
            Self::Seed => write!(f, "seed"),
        }
    }
}

/// Emitted once for every newly validated image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFoundEvent {
    /// The validated URL.
    pub url: String,
    /// Phase that confirmed it.
    pub phase: ProbePhase,
}

impl ImageFoundEvent {
    /// Creates a new event.
    #[must_use]
    pub fn new(url: impl Into<String>, phase: ProbePhase) -> Self {
        Self {
            url: url.into(),
            phase,
        }
    }
}
