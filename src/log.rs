//! Logging macros gated on the `tracing` feature.
//!
//! With the feature enabled these are the `tracing` macros; without it
//! they expand to nothing, so resolution and drawing stay silent and
//! dependency-free in embedding hosts that do not care.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, warn_ as warn};
