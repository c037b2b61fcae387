//! Octavia core — typed base-8 digit sequences, configuration and errors
//! shared by the ring-numeral engine and its consumers.

pub mod config;
pub mod digits;
pub mod error;

pub use config::{OctaviaConfig, RenderConfig, ServerConfig};
pub use digits::{CanonicalDigits, RingCounts, FULL_RING, RADIX};
pub use error::{OctaviaError, Result};
