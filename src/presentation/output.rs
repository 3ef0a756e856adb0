//! CLI result rendering.

use std::io::Write;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

use crate::application::dto::{DiscoveryResponse, DiscoveryStrategy};
use crate::domain::entities::{DecodedImageRef, ImageFoundEvent};
use crate::domain::ports::DiscoveryObserver;
use crate::infrastructure::config::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    seed_url: &'a str,
    strategy: DiscoveryStrategy,
    probes_issued: usize,
    urls: Vec<&'a str>,
}

/// Writes discovery results in the configured format.
///
/// In text mode every URL is written as soon as it is validated; in JSON
/// mode nothing is written until [`ResultPrinter::finish`].
pub struct ResultPrinter<W: Write + Send> {
    format: OutputFormat,
    out: Mutex<W>,
}

impl ResultPrinter<std::io::Stdout> {
    /// Creates a printer writing to stdout.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, std::io::stdout())
    }
}

impl<W: Write + Send> ResultPrinter<W> {
    /// Creates a printer writing to `out`.
    #[must_use]
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out: Mutex::new(out),
        }
    }

    /// Writes the final report.
    ///
    /// # Errors
    /// Returns error if writing or serialization fails.
    pub fn finish(&self, response: &DiscoveryResponse) -> std::io::Result<()> {
        let mut out = self.out.lock();
        if self.format == OutputFormat::Json {
            let report = JsonReport {
                seed_url: &response.seed_url,
                strategy: response.strategy,
                probes_issued: response.probes_issued,
                urls: response.sorted_urls(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        out.flush()
    }

    /// Writes decoded URL components as JSON.
    ///
    /// # Errors
    /// Returns error if writing or serialization fails.
    pub fn print_decoded(&self, reference: &DecodedImageRef) -> std::io::Result<()> {
        let mut out = self.out.lock();
        serde_json::to_writer_pretty(&mut *out, reference)?;
        writeln!(out)?;
        out.flush()
    }

    /// Consumes the printer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> DiscoveryObserver for ResultPrinter<W> {
    fn on_found(&self, event: &ImageFoundEvent) {
        if self.format != OutputFormat::Text {
            return;
        }
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", event.url).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write discovered URL");
        }
    }
}
