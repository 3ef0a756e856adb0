//! Progressive discovery notification port.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::ImageFoundEvent;

/// Receives each image as soon as it is validated.
///
/// Notifications are delivered before the aggregate result containing the
/// same URL is returned to the caller.
pub trait DiscoveryObserver: Send + Sync {
    /// Called once per newly validated URL.
    fn on_found(&self, event: &ImageFoundEvent);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DiscoveryObserver for NoopObserver {
    fn on_found(&self, _event: &ImageFoundEvent) {}
}

impl<F> DiscoveryObserver for F
where
    F: Fn(&ImageFoundEvent) + Send + Sync,
{
    fn on_found(&self, event: &ImageFoundEvent) {
        self(event);
    }
}

impl DiscoveryObserver for mpsc::UnboundedSender<ImageFoundEvent> {
    fn on_found(&self, event: &ImageFoundEvent) {
        if self.send(event.clone()).is_err() {
            debug!(url = %event.url, "Discovery receiver dropped");
        }
    }
}
