//! Session Store Port - Interface for persisting handoff sessions.
//!
//! The store is keyed by the opaque `SessionId` carried in the session
//! cookie. It backs every token lifecycle transition and must tolerate
//! destroying a record that no longer exists.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::handoff::HandoffSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Backend(String),

    #[error("Failed to (de)serialize session {id}: {reason}")]
    Serialization { id: SessionId, reason: String },

    #[error("Failed to destroy session {id}: {reason}")]
    DestroyFailed { id: SessionId, reason: String },
}

/// Port for loading, writing and destroying session records
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for `id`
    ///
    /// # Returns
    /// The stored record, or an empty session when none exists yet
    /// (sessions are created implicitly on first read).
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend cannot be read
    async fn load(&self, id: SessionId) -> Result<HandoffSession, SessionStoreError>;

    /// Whether a live record is stored under `id`
    ///
    /// Unlike `load`, an absent record is reported rather than replaced by
    /// an empty session.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend cannot be read
    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    /// Write the whole session record, replacing what was stored
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the write fails
    async fn save(&self, session: &HandoffSession) -> Result<(), SessionStoreError>;

    /// Remove the record for `id`
    ///
    /// Destroying an absent record succeeds.
    ///
    /// # Errors
    /// Returns `SessionStoreError::DestroyFailed` if the backend errors
    async fn destroy(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
