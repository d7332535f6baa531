//! One-time token value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::foundation::ValidationError;

/// Opaque, hex-encoded shared secret issued to a session.
///
/// The value never appears in `Debug` output; use [`Token::expose`] where
/// the raw string is genuinely needed (handing it to the processor).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Builds a token by hex-encoding raw entropy.
    pub fn from_entropy(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parses a previously issued token string.
    ///
    /// Accepts only non-empty, even-length, lowercase hex.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        if value.len() % 2 != 0 {
            return Err(ValidationError::invalid_format("token", "odd length"));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(ValidationError::invalid_format(
                "token",
                "expected lowercase hex",
            ));
        }
        Ok(Self(value))
    }

    /// Compares a client-supplied candidate against this token.
    ///
    /// Constant-time over the token bytes. Length mismatch returns early,
    /// which only reveals the (public) token length.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let provided = candidate.as_bytes();
        if expected.len() != provided.len() {
            return false;
        }
        expected.ct_eq(provided).into()
    }

    /// Returns the raw token string.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Number of hex characters in the token.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for tokens built through the constructors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Token {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} hex chars>)", self.0.len())
    }
}
