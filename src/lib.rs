//! imgprobe - Discover every high-resolution image of a hosted product.
//!
//! Given one observed product image URL, the crate decodes the host's naming
//! layout, generates candidate URLs for every image type and index, and probes
//! them in tiered concurrent batches to find the images that actually exist.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing CLI output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "imgprobe";
