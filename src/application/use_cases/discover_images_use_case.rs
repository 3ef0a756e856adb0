//! Image discovery use case implementation.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::application::dto::{DiscoveryRequest, DiscoveryResponse, DiscoveryStrategy};
use crate::application::services::{
    CandidateBatch, JiomartUrlCodec, PRIORITY_INDICES, SECONDARY_INDICES,
};
use crate::domain::entities::{ImageFoundEvent, ImageType, ProbePhase};
use crate::domain::ports::{DiscoveryObserver, ExistenceProbePort, NoopObserver};

/// Default cap on probes running at the same time.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 20;

/// Tunables for the discovery algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Indices probed in the first phase.
    pub priority_indices: RangeInclusive<u32>,
    /// Indices probed in the second phase.
    pub secondary_indices: RangeInclusive<u32>,
    /// Retry the priority range with the next p-number when nothing validates.
    ///
    /// This is a guess about an off-by-one in the p-number segment and has
    /// never been confirmed against the host.
    pub p_number_fallback: bool,
    /// Maximum probes in flight across all discoveries sharing this use case.
    pub max_in_flight: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            priority_indices: PRIORITY_INDICES,
            secondary_indices: SECONDARY_INDICES,
            p_number_fallback: true,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// Turns one seed image URL into every validated original-tier image URL.
#[derive(Clone)]
pub struct DiscoverImagesUseCase {
    probe_port: Arc<dyn ExistenceProbePort>,
    options: DiscoveryOptions,
    semaphore: Arc<Semaphore>,
}

impl std::fmt::Debug for DiscoverImagesUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoverImagesUseCase")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Accumulates results for a single discovery run.
struct DiscoveryRun<'a> {
    found: HashSet<String>,
    probes_issued: usize,
    observer: &'a dyn DiscoveryObserver,
}

impl<'a> DiscoveryRun<'a> {
    fn new(observer: &'a dyn DiscoveryObserver) -> Self {
        Self {
            found: HashSet::new(),
            probes_issued: 0,
            observer,
        }
    }

    fn record(&mut self, url: String, phase: ProbePhase) {
        if self.found.contains(&url) {
            return;
        }
        debug!(url = %url, phase = %phase, "Image found");
        self.observer.on_found(&ImageFoundEvent::new(url.as_str(), phase));
        self.found.insert(url);
    }

    fn finish(self, seed_url: String, strategy: DiscoveryStrategy) -> DiscoveryResponse {
        DiscoveryResponse {
            seed_url,
            urls: self.found,
            strategy,
            probes_issued: self.probes_issued,
        }
    }
}

impl DiscoverImagesUseCase {
    /// Creates a use case with default options.
    #[must_use]
    pub fn new(probe_port: Arc<dyn ExistenceProbePort>) -> Self {
        Self::with_options(probe_port, DiscoveryOptions::default())
    }

    /// Creates a use case with the given options.
    #[must_use]
    pub fn with_options(probe_port: Arc<dyn ExistenceProbePort>, options: DiscoveryOptions) -> Self {
        let semaphore = Arc::new(Semaphore::new(options.max_in_flight.max(1)));
        Self {
            probe_port,
            options,
            semaphore,
        }
    }

    /// Returns the active options.
    #[must_use]
    pub const fn options(&self) -> &DiscoveryOptions {
        &self.options
    }

    /// Discovers every image reachable from `seed_url`.
    ///
    /// Convenience wrapper around [`Self::execute`] returning only the set.
    pub async fn discover(
        &self,
        seed_url: &str,
        observer: Option<&dyn DiscoveryObserver>,
    ) -> HashSet<String> {
        let observer = observer.unwrap_or(&NoopObserver);
        self.execute(DiscoveryRequest::new(seed_url), observer)
            .await
            .urls
    }

    /// Executes discovery for the request.
    ///
    /// Never fails: probe errors count as missing images and an empty set is
    /// a legitimate outcome.
    pub async fn execute(
        &self,
        request: DiscoveryRequest,
        observer: &dyn DiscoveryObserver,
    ) -> DiscoveryResponse {
        let seed_url = request.seed_url;
        let mut run = DiscoveryRun::new(observer);

        let Some(reference) = JiomartUrlCodec::decode(&seed_url) else {
            info!(seed = %seed_url, "Seed does not follow the product image layout, probing it alone");
            let strategy = self.probe_seed(&seed_url, &mut run).await;
            return run.finish(seed_url, strategy);
        };

        info!(
            product_id = %reference.product_id(),
            name = %reference.name(),
            "Decoded seed, probing candidates"
        );

        let priority = CandidateBatch::generate(
            ProbePhase::Priority,
            &reference,
            &ImageType::ALL,
            self.options.priority_indices.clone(),
        );
        self.run_batch(priority, &mut run).await;

        let secondary = CandidateBatch::generate(
            ProbePhase::Secondary,
            &reference,
            &ImageType::ALL,
            self.options.secondary_indices.clone(),
        );
        self.run_batch(secondary, &mut run).await;

        if !run.found.is_empty() {
            info!(count = run.found.len(), probes = run.probes_issued, "Discovery complete");
            return run.finish(seed_url, DiscoveryStrategy::Pattern);
        }

        if self.options.p_number_fallback {
            if let Some(shifted) = reference.with_next_p_number() {
                warn!(
                    p_number = %shifted.p_number(),
                    "No candidates validated, trying speculative p-number fallback"
                );
                let fallback = CandidateBatch::generate(
                    ProbePhase::PNumberFallback,
                    &shifted,
                    &[ImageType::ProductImages],
                    self.options.priority_indices.clone(),
                );
                self.run_batch(fallback, &mut run).await;

                if !run.found.is_empty() {
                    info!(count = run.found.len(), "P-number fallback found images");
                    return run.finish(seed_url, DiscoveryStrategy::PNumberFallback);
                }
            }
        }

        let strategy = self.probe_seed(&seed_url, &mut run).await;
        run.finish(seed_url, strategy)
    }

    async fn probe_seed(&self, seed_url: &str, run: &mut DiscoveryRun<'_>) -> DiscoveryStrategy {
        run.probes_issued += 1;
        if self.probe_port.probe(seed_url).await {
            run.record(seed_url.to_string(), ProbePhase::Seed);
            DiscoveryStrategy::SeedOnly
        } else {
            debug!(seed = %seed_url, "Seed did not load");
            DiscoveryStrategy::NotFound
        }
    }

    /// Probes every candidate in the batch concurrently and waits for all of
    /// them to settle. Hits are reported in completion order.
    async fn run_batch(&self, batch: CandidateBatch, run: &mut DiscoveryRun<'_>) {
        let phase = batch.phase;
        let total = batch.len();
        let before = run.found.len();
        debug!(phase = %phase, candidates = total, "Probing batch");

        let probe_port = self.probe_port.as_ref();
        let semaphore = self.semaphore.as_ref();

        let mut pending: FuturesUnordered<_> = batch
            .urls
            .into_iter()
            .map(|url| async move {
                let exists = match semaphore.acquire().await {
                    Ok(_permit) => probe_port.probe(&url).await,
                    Err(_) => false,
                };
                (url, exists)
            })
            .collect();

        run.probes_issued += total;

        while let Some((url, exists)) = pending.next().await {
            if exists {
                run.record(url, phase);
            }
        }

        debug!(
            phase = %phase,
            hits = run.found.len() - before,
            candidates = total,
            "Batch settled"
        );
    }
}
