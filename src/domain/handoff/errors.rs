//! Handoff-specific error types.

use thiserror::Error;

use crate::ports::SessionStoreError;

/// Why a validation or submission attempt was refused.
///
/// None of these are faults: each maps to a defined client-facing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Candidate does not equal the stored token.
    #[error("token mismatch")]
    TokenMismatch,
    /// Elapsed time since issuance is past the relevant window.
    #[error("token window exceeded")]
    WindowExceeded,
    /// Session holds no live token.
    #[error("no active token")]
    NoActiveToken,
    /// Submission carried no usable payload.
    #[error("missing payload")]
    MissingPayload,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::TokenMismatch => "token_mismatch",
            RejectReason::WindowExceeded => "window_exceeded",
            RejectReason::NoActiveToken => "no_active_token",
            RejectReason::MissingPayload => "missing_payload",
        }
    }
}

/// Infrastructure failures that prevent a transition from running at all.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("session store error: {0}")]
    Store(#[from] SessionStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_reason_codes_are_snake_case() {
        assert_eq!(RejectReason::TokenMismatch.as_str(), "token_mismatch");
        assert_eq!(RejectReason::NoActiveToken.as_str(), "no_active_token");
    }

    #[test]
    fn handoff_error_wraps_store_error() {
        let err: HandoffError = SessionStoreError::Backend("connection reset".into()).into();
        assert!(err.to_string().contains("connection reset"));
    }
}
