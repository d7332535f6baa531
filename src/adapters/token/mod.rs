//! Token generator adapters.
//!
//! - `OsRngTokenGenerator` - Operating-system CSPRNG, hex encoded

mod os_rng;

pub use os_rng::{OsRngTokenGenerator, DEFAULT_TOKEN_BYTES};
