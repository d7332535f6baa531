//! Server-side session record holding the live token.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::state::TokenState;
use super::token::Token;

/// A token together with the moment it was issued.
///
/// Keeping both in one value means a session can never hold a token
/// without an issuance time, or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: Token,
    pub issued_at: Timestamp,
}

impl IssuedToken {
    pub fn new(token: Token, issued_at: Timestamp) -> Self {
        Self { token, issued_at }
    }

    /// Milliseconds between issuance and `now`.
    pub fn elapsed_millis(&self, now: Timestamp) -> i64 {
        now.millis_since(&self.issued_at)
    }
}

/// One client's in-progress token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffSession {
    id: SessionId,
    issued: Option<IssuedToken>,
}

impl HandoffSession {
    /// Creates an empty session (no live token).
    pub fn new(id: SessionId) -> Self {
        Self { id, issued: None }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn issued(&self) -> Option<&IssuedToken> {
        self.issued.as_ref()
    }

    pub fn token(&self) -> Option<&Token> {
        self.issued.as_ref().map(|i| &i.token)
    }

    pub fn issued_at(&self) -> Option<Timestamp> {
        self.issued.as_ref().map(|i| i.issued_at)
    }

    /// Persisted state of this record.
    pub fn state(&self) -> TokenState {
        if self.issued.is_some() {
            TokenState::TokenIssued
        } else {
            TokenState::NoToken
        }
    }

    /// Stores a fresh token, replacing any prior unconsumed one.
    pub fn issue(&mut self, token: Token, now: Timestamp) -> &IssuedToken {
        self.issued.insert(IssuedToken::new(token, now))
    }

    /// Clears token and issuance time together, returning what was live.
    pub fn clear(&mut self) -> Option<IssuedToken> {
        self.issued.take()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_none()
    }
}
