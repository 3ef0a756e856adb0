//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// URL codec and candidate generation.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{DiscoveryRequest, DiscoveryResponse, DiscoveryStrategy};
pub use services::{CandidateBatch, JiomartUrlCodec};
pub use use_cases::{DiscoverImagesUseCase, DiscoveryOptions};
