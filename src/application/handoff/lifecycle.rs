//! TokenLifecycle - the one-time token state machine.
//!
//! ```text
//! NoToken --issue--> TokenIssued --validate--> Validated (non-destructive)
//!                        |
//!                        +--submit_payload / submit_upload_text--> Consumed
//!                        +--window exceeded------------------------> Expired
//! ```
//!
//! `Consumed` and `Expired` are terminal: the session record is destroyed
//! and the next request starts again from `NoToken`.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::handoff::{
    ExpiryPolicy, HandoffError, HandoffSession, IssuedToken, RejectReason, TokenState,
    TokenWindows,
};
use crate::ports::{Clock, ProcessingJob, SessionStore, TokenGenerator};

use super::dispatcher::ProcessingDispatcher;
use super::session_locks::SessionLocks;

/// Result of a non-destructive token probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(RejectReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Result of a JSON payload submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Consumed,
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, SubmitOutcome::Consumed)
    }
}

/// Result of a plaintext upload submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Consumed,
    Expired,
    Rejected(RejectReason),
}

/// Orchestrates issuance, validation and single-use consumption of tokens.
pub struct TokenLifecycle {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    dispatcher: ProcessingDispatcher,
    windows: TokenWindows,
    expiry_policy: ExpiryPolicy,
    locks: SessionLocks,
}

impl TokenLifecycle {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        dispatcher: ProcessingDispatcher,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
            dispatcher,
            windows: TokenWindows::default(),
            expiry_policy: ExpiryPolicy::default(),
            locks: SessionLocks::new(),
        }
    }

    pub fn with_windows(mut self, windows: TokenWindows) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    pub fn windows(&self) -> TokenWindows {
        self.windows
    }

    /// Issue a fresh token into the session, replacing any live one.
    pub async fn issue(&self, id: SessionId) -> Result<IssuedToken, HandoffError> {
        let _guard = self.locks.acquire(id).await;

        let mut session = self.store.load(id).await?;
        let from = session.state();
        let issued = session
            .issue(self.generator.generate(), self.clock.now())
            .clone();
        self.store.save(&session).await?;

        log_transition(id, from, TokenState::TokenIssued);
        tracing::info!(session_id = %id, replaced = from == TokenState::TokenIssued, "Token issued");
        Ok(issued)
    }

    /// Check a candidate against the live token without consuming it.
    ///
    /// Elapsed time is not considered; only the token value is.
    pub async fn validate(
        &self,
        id: SessionId,
        candidate: Option<&str>,
    ) -> Result<ValidationOutcome, HandoffError> {
        let session = self.store.load(id).await?;

        let outcome = match (session.token(), candidate) {
            (None, _) => ValidationOutcome::Invalid(RejectReason::NoActiveToken),
            (Some(token), Some(candidate)) if token.matches(candidate) => ValidationOutcome::Valid,
            (Some(_), _) => ValidationOutcome::Invalid(RejectReason::TokenMismatch),
        };

        match outcome {
            ValidationOutcome::Valid => log_transition(id, session.state(), TokenState::Validated),
            ValidationOutcome::Invalid(reason) => {
                tracing::debug!(session_id = %id, reason = reason.as_str(), "Token validation failed");
            }
        }
        Ok(outcome)
    }

    /// Accept a JSON payload if a token is live and inside the payload window.
    ///
    /// On success the session is cleared and destroyed before the payload is
    /// dispatched, so a retried request finds no token.
    pub async fn submit_payload(
        &self,
        id: SessionId,
        payload: Option<serde_json::Value>,
    ) -> Result<SubmitOutcome, HandoffError> {
        let _guard = self.locks.acquire(id).await;
        let now = self.clock.now();
        let mut session = self.store.load(id).await?;

        let payload = match payload {
            Some(value) if !value.is_null() => value,
            _ => return Ok(self.reject_submit(id, RejectReason::MissingPayload)),
        };

        let issued = match session.issued() {
            Some(issued) => issued.clone(),
            None => return Ok(self.reject_submit(id, RejectReason::NoActiveToken)),
        };

        if let Err(reason) = self.windows.check_payload(&issued, now) {
            tracing::info!(
                session_id = %id,
                elapsed_ms = issued.elapsed_millis(now),
                window_ms = self.windows.payload_ms,
                "Payload window exceeded"
            );
            log_transition(id, session.state(), TokenState::Expired);
            self.expire(&session).await;
            return Ok(self.reject_submit(id, reason));
        }

        self.consume(&mut session).await?;
        self.dispatcher
            .dispatch(ProcessingJob::payload(payload.to_string(), issued.token));

        Ok(SubmitOutcome::Consumed)
    }

    /// Accept a plaintext upload if the token was issued inside the upload window.
    ///
    /// Only issuance time is checked on this path; the client does not echo
    /// the token back.
    pub async fn submit_upload_text(
        &self,
        id: SessionId,
        plaintext: Option<String>,
    ) -> Result<UploadOutcome, HandoffError> {
        let _guard = self.locks.acquire(id).await;
        let now = self.clock.now();
        let mut session = self.store.load(id).await?;

        if self.windows.upload_expired(session.issued_at(), now) {
            tracing::info!(
                session_id = %id,
                issued = session.issued_at().is_some(),
                window_ms = self.windows.upload_ms,
                "Upload window exceeded"
            );
            log_transition(id, session.state(), TokenState::Expired);
            self.expire(&session).await;
            return Ok(UploadOutcome::Expired);
        }

        let Some(plaintext) = plaintext else {
            tracing::debug!(session_id = %id, reason = RejectReason::MissingPayload.as_str(), "Upload rejected");
            return Ok(UploadOutcome::Rejected(RejectReason::MissingPayload));
        };

        self.consume(&mut session).await?;
        self.dispatcher.dispatch(ProcessingJob::text(plaintext));

        Ok(UploadOutcome::Consumed)
    }

    fn reject_submit(&self, id: SessionId, reason: RejectReason) -> SubmitOutcome {
        tracing::debug!(session_id = %id, reason = reason.as_str(), "Payload rejected");
        SubmitOutcome::Rejected(reason)
    }

    /// Clear, persist the cleared record, then destroy it.
    ///
    /// Persisting first means a failed destroy still leaves no live token.
    async fn consume(&self, session: &mut HandoffSession) -> Result<(), HandoffError> {
        let id = session.id();
        let from = session.state();
        session.clear();
        self.store.save(session).await?;
        self.destroy_quietly(id).await;
        log_transition(id, from, TokenState::Consumed);
        Ok(())
    }

    async fn expire(&self, session: &HandoffSession) {
        match self.expiry_policy {
            ExpiryPolicy::Destroy => self.destroy_quietly(session.id()).await,
            ExpiryPolicy::Retain => {
                tracing::debug!(session_id = %session.id(), "Expired session retained by policy");
            }
        }
    }

    async fn destroy_quietly(&self, id: SessionId) {
        match self.store.destroy(id).await {
            Ok(()) => tracing::info!(session_id = %id, "Session destroyed"),
            Err(e) => tracing::warn!(session_id = %id, error = %e, "Error destroying session"),
        }
    }
}

fn log_transition(id: SessionId, from: TokenState, to: TokenState) {
    match from.transition_to(to) {
        Ok(state) => tracing::debug!(session_id = %id, %from, to = %state, "Token state changed"),
        Err(e) => tracing::warn!(session_id = %id, error = %e, "Unexpected token state change"),
    }
}

impl std::fmt::Debug for TokenLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenLifecycle")
            .field("windows", &self.windows)
            .field("expiry_policy", &self.expiry_policy)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
