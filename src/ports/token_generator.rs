//! Token generator port.
//!
//! Produces the opaque one-time tokens handed to sessions. Implementations
//! must draw from a cryptographically secure source and always emit the same
//! fixed-length format.

use crate::domain::handoff::Token;

/// Port for minting fresh tokens.
///
/// Generation is synchronous and non-blocking; the only shared state is the
/// entropy source.
pub trait TokenGenerator: Send + Sync {
    /// Returns a new, unpredictable token.
    fn generate(&self) -> Token;

    /// Length in characters of every token this generator emits.
    fn token_len(&self) -> usize;
}
