//! Application services.

pub mod candidates;
pub mod url_codec;

pub use candidates::{CandidateBatch, PRIORITY_INDICES, SECONDARY_INDICES};
pub use url_codec::{IMAGE_BASE_URL, JiomartUrlCodec};
