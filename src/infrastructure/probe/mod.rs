//! Existence probe adapters.

pub mod http_probe;

pub use http_probe::{
    DEFAULT_PROBE_TIMEOUT_MS, DEFAULT_USER_AGENT, HttpImageProbe, HttpProbeConfig,
};
