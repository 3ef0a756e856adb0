//! Domain error types.

mod codec_error;
mod probe_error;

pub use codec_error::CodecError;
pub use probe_error::ProbeError;
