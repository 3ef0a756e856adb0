use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use imgprobe::application::{DiscoverImagesUseCase, DiscoveryRequest, JiomartUrlCodec};
use imgprobe::infrastructure::{AppConfig, CliArgs, HttpImageProbe, StorageManager};
use imgprobe::presentation::ResultPrinter;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level.to_tracing_level()).into())
        .from_env_lossy();

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;

    config.merge_with_args(args);
    config.validate().wrap_err("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = imgprobe::VERSION, "Starting imgprobe");

    let printer = ResultPrinter::stdout(config.output.format);

    if args.decode_only {
        let reference = JiomartUrlCodec::try_decode(&args.seed_url)
            .wrap_err("seed URL does not follow the product image layout")?;
        printer.print_decoded(&reference)?;
        return Ok(());
    }

    let probe = Arc::new(HttpImageProbe::with_config(&config.probe_config())?);
    let use_case = DiscoverImagesUseCase::with_options(probe, config.discovery_options());

    let response = use_case
        .execute(DiscoveryRequest::new(args.seed_url), &printer)
        .await;

    printer.finish(&response)?;

    eprintln!(
        "{} image(s) found via {} ({} probes)",
        response.urls.len(),
        response.strategy,
        response.probes_issued
    );

    Ok(())
}
