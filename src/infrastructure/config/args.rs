use super::app_config::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "imgprobe",
    version,
    about = "Discover every high-resolution product image from one hosted image URL",
    long_about = None
)]
pub struct CliArgs {
    /// Known-valid product image URL to start from.
    #[arg(value_name = "SEED_URL")]
    pub seed_url: String,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "IMGPROBE_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Per-probe timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Maximum probes in flight at once.
    #[arg(long, value_name = "N")]
    pub max_in_flight: Option<usize>,

    /// User agent sent to the image host.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Retry with the next p-number when nothing is found.
    #[arg(long)]
    pub p_number_fallback: Option<bool>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the decoded URL components and exit without probing.
    #[arg(long)]
    pub decode_only: bool,
}
