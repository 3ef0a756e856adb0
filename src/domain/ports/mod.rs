mod discovery_observer;
mod existence_probe_port;

pub use discovery_observer::{DiscoveryObserver, NoopObserver};
pub use existence_probe_port::ExistenceProbePort;

#[cfg(test)]
pub mod mocks {
    pub use super::existence_probe_port::mock::MockProbe;
}
