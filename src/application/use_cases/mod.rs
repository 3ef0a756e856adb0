//! Use case implementations.

mod discover_images_use_case;

pub use discover_images_use_case::{DEFAULT_MAX_IN_FLIGHT, DiscoverImagesUseCase, DiscoveryOptions};
