//! Existence probe port definition.

use async_trait::async_trait;

/// Port for checking whether a URL resolves to a loadable image.
///
/// Implementations must resolve within a bounded time and must not fail:
/// every error, including a timeout, is reported as `false`.
#[async_trait]
pub trait ExistenceProbePort: Send + Sync {
    /// Returns true if the resource at `url` loads successfully.
    async fn probe(&self, url: &str) -> bool;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use parking_lot::Mutex;

    /// Mock probe backed by a static set of existing URLs.
    pub struct MockProbe {
        existing: HashSet<String>,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
        probed: Mutex<Vec<String>>,
        delay: Option<Duration>,
    }

    impl MockProbe {
        /// Creates a mock where nothing exists.
        pub fn empty() -> Self {
            Self::with_existing(Vec::<String>::new())
        }

        /// Creates a mock where exactly the given URLs exist.
        pub fn with_existing<I, S>(urls: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                existing: urls.into_iter().map(Into::into).collect(),
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
                probed: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        /// Delays every probe by the given duration.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Returns the number of probes issued.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Returns the highest number of probes observed running at once.
        pub fn peak_in_flight(&self) -> usize {
            self.peak_in_flight.load(Ordering::SeqCst)
        }

        /// Returns every probed URL in call order.
        pub fn probed(&self) -> Vec<String> {
            self.probed.lock().clone()
        }
    }

    #[async_trait]
    impl ExistenceProbePort for MockProbe {
        async fn probe(&self, url: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.probed.lock().push(url.to_string());
            let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.existing.contains(url)
        }
    }
}
