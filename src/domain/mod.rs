//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{DecodedImageRef, ImageFoundEvent, ImageType, ProbePhase, Resolution};
pub use errors::{CodecError, ProbeError};
pub use ports::{DiscoveryObserver, ExistenceProbePort, NoopObserver};
