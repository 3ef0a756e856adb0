//! Data transfer objects for the application layer.

mod discovery_dto;

pub use discovery_dto::{DiscoveryRequest, DiscoveryResponse, DiscoveryStrategy};
