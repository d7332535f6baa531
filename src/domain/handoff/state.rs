//! Token lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a session stands in the one-time token exchange.
///
/// Only `NoToken` and `TokenIssued` are ever persisted. `Validated` is the
/// outcome of a non-destructive probe; `Expired` and `Consumed` are terminal
/// and collapse back to `NoToken` once the session record is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    NoToken,
    TokenIssued,
    Validated,
    Expired,
    Consumed,
}

impl TokenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenState::NoToken => "no_token",
            TokenState::TokenIssued => "token_issued",
            TokenState::Validated => "validated",
            TokenState::Expired => "expired",
            TokenState::Consumed => "consumed",
        }
    }
}

impl fmt::Display for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for TokenState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TokenState::*;
        matches!(
            (self, target),
            (NoToken, TokenIssued)
                | (NoToken, Expired)
                | (TokenIssued, TokenIssued)
                | (TokenIssued, Validated)
                | (TokenIssued, Expired)
                | (TokenIssued, Consumed)
                | (Validated, TokenIssued)
                | (Validated, Validated)
                | (Validated, Expired)
                | (Validated, Consumed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TokenState::*;
        match self {
            NoToken => vec![TokenIssued, Expired],
            TokenIssued | Validated => vec![TokenIssued, Validated, Expired, Consumed],
            Expired | Consumed => vec![],
        }
    }
}
