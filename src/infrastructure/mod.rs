//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Existence probe adapters.
pub mod probe;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, OutputFormat, StorageManager};
pub use probe::{HttpImageProbe, HttpProbeConfig};
