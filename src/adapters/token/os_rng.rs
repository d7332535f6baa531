//! CSPRNG-backed token generator.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::handoff::Token;
use crate::ports::TokenGenerator;

/// Bytes of entropy per token; hex encoding doubles the visible length.
pub const DEFAULT_TOKEN_BYTES: usize = 4;

/// Generates tokens from `OsRng`, the operating system's CSPRNG.
#[derive(Debug, Clone, Copy)]
pub struct OsRngTokenGenerator {
    byte_len: usize,
}

impl OsRngTokenGenerator {
    /// Creates a generator emitting `byte_len` bytes of entropy per token.
    ///
    /// A zero length is bumped to one so tokens are never empty.
    pub fn new(byte_len: usize) -> Self {
        Self {
            byte_len: byte_len.max(1),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

impl Default for OsRngTokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

impl TokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> Token {
        let mut bytes = vec![0u8; self.byte_len];
        OsRng.fill_bytes(&mut bytes);
        Token::from_entropy(&bytes)
    }

    fn token_len(&self) -> usize {
        self.byte_len * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_tokens_are_eight_hex_chars() {
        let generator = OsRngTokenGenerator::default();
        let token = generator.generate();

        assert_eq!(token.len(), 8);
        assert_eq!(generator.token_len(), 8);
        assert!(Token::parse(token.expose().to_string()).is_ok());
    }

    #[test]
    fn larger_entropy_widens_tokens() {
        let generator = OsRngTokenGenerator::new(16);
        assert_eq!(generator.generate().len(), 32);
    }

    #[test]
    fn zero_length_is_bumped() {
        let generator = OsRngTokenGenerator::new(0);
        assert_eq!(generator.byte_len(), 1);
        assert!(!generator.generate().is_empty());
    }

    #[test]
    fn consecutive_tokens_differ() {
        let generator = OsRngTokenGenerator::new(16);
        let tokens: HashSet<String> = (0..100)
            .map(|_| generator.generate().expose().to_string())
            .collect();
        assert_eq!(tokens.len(), 100);
    }
}
