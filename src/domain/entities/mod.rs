//! Domain entity definitions.

mod discovery;
mod image_ref;

pub use discovery::{ImageFoundEvent, ProbePhase};
pub use image_ref::{DecodedImageRef, ImageType, Resolution};
