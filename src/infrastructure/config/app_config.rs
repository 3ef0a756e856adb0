//! Application configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::application::services::{PRIORITY_INDICES, SECONDARY_INDICES};
use crate::application::use_cases::{DEFAULT_MAX_IN_FLIGHT, DiscoveryOptions};
use crate::infrastructure::probe::{DEFAULT_PROBE_TIMEOUT_MS, DEFAULT_USER_AGENT, HttpProbeConfig};

use super::args::CliArgs;
use super::storage::ConfigError;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Result output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One URL per line, printed as soon as it is found.
    #[default]
    Text,
    /// A single JSON document once discovery finishes.
    Json,
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Existence probe configuration.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Discovery algorithm configuration.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Existence probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-probe timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent sent to the image host.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum probes in flight at once.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

/// Inclusive index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    /// First index.
    pub start: u32,
    /// Last index, inclusive.
    pub end: u32,
}

impl IndexRange {
    /// Returns the range as a `RangeInclusive`.
    #[must_use]
    pub const fn to_range(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl From<RangeInclusive<u32>> for IndexRange {
    fn from(range: RangeInclusive<u32>) -> Self {
        Self {
            start: *range.start(),
            end: *range.end(),
        }
    }
}

/// Discovery algorithm configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Retry with the next p-number when nothing validates. Speculative.
    #[serde(default = "default_true")]
    pub p_number_fallback: bool,

    /// Indices probed first.
    #[serde(default = "default_priority_range")]
    pub priority_range: IndexRange,

    /// Indices probed after the priority range settles.
    #[serde(default = "default_secondary_range")]
    pub secondary_range: IndexRange,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            p_number_fallback: true,
            priority_range: default_priority_range(),
            secondary_range: default_secondary_range(),
        }
    }
}

impl DiscoveryConfig {
    /// Checks that both ranges are well formed.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` when a range starts after it ends.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in [
            ("priority_range", self.priority_range),
            ("secondary_range", self.secondary_range),
        ] {
            if range.start > range.end {
                return Err(ConfigError::InvalidRange {
                    name,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_in_flight() -> usize {
    DEFAULT_MAX_IN_FLIGHT
}

fn default_priority_range() -> IndexRange {
    PRIORITY_INDICES.into()
}

fn default_secondary_range() -> IndexRange {
    SECONDARY_INDICES.into()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(timeout_ms) = args.timeout_ms {
            self.probe.timeout_ms = timeout_ms;
        }
        if let Some(max_in_flight) = args.max_in_flight {
            self.probe.max_in_flight = max_in_flight;
        }
        if let Some(user_agent) = &args.user_agent {
            self.probe.user_agent = user_agent.clone();
        }
        if let Some(p_number_fallback) = args.p_number_fallback {
            self.discovery.p_number_fallback = p_number_fallback;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
    }

    /// Checks the configuration for values the engine cannot run with.
    ///
    /// # Errors
    /// Returns `ConfigError` for malformed ranges or a zero concurrency cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.discovery.validate()?;
        if self.probe.max_in_flight == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }

    /// Returns the discovery options derived from this configuration.
    #[must_use]
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            priority_indices: self.discovery.priority_range.to_range(),
            secondary_indices: self.discovery.secondary_range.to_range(),
            p_number_fallback: self.discovery.p_number_fallback,
            max_in_flight: self.probe.max_in_flight,
        }
    }

    /// Returns the HTTP probe configuration derived from this configuration.
    #[must_use]
    pub fn probe_config(&self) -> HttpProbeConfig {
        HttpProbeConfig {
            timeout_ms: self.probe.timeout_ms,
            user_agent: self.probe.user_agent.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::default(),
            probe: ProbeConfig::default(),
            discovery: DiscoveryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [probe]
            timeout_ms = 2500

            [discovery]
            p_number_fallback = false
            secondary_range = { start = 6, end = 20 }

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.probe.timeout_ms, 2500);
        assert_eq!(config.probe.max_in_flight, DEFAULT_MAX_IN_FLIGHT);
        assert!(!config.discovery.p_number_fallback);
        assert_eq!(config.discovery.priority_range.to_range(), 0..=5);
        assert_eq!(config.discovery.secondary_range.to_range(), 6..=20);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.probe.timeout_ms, 4000);
        assert_eq!(config.discovery_options(), DiscoveryOptions::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let mut config = AppConfig::default();
        config.discovery.priority_range = IndexRange { start: 5, end: 0 };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                name: "priority_range",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = AppConfig::default();
        config.probe.max_in_flight = 0;

        assert!(matches!(config.validate(), Err(ConfigError::ZeroConcurrency)));
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = CliArgs::parse_from([
            "imgprobe",
            "--timeout-ms",
            "1000",
            "--p-number-fallback",
            "false",
            "--format",
            "json",
            "https://example.com/a.jpg",
        ]);
        let mut config = AppConfig::default();

        config.merge_with_args(&args);

        assert_eq!(config.probe.timeout_ms, 1000);
        assert!(!config.discovery.p_number_fallback);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.probe_config().timeout_ms, 1000);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }
}
