//! In-Memory Session Store Adapter
//!
//! Keeps session records in a process-local map. Suitable for tests and
//! single-instance deployments. Each record expires `ttl` after its last
//! write, mirroring the `SET .. EX` behaviour of the Redis store; stale
//! records read as absent and are dropped on the next write.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::adapters::clock::SystemClock;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::handoff::HandoffSession;
use crate::ports::{Clock, SessionStore, SessionStoreError};

/// Record lifetime when none is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(86_400);

#[derive(Debug, Clone)]
struct StoredSession {
    session: HandoffSession,
    written_at: Timestamp,
}

/// In-memory storage for handoff sessions
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    ttl_ms: i64,
    clock: Arc<dyn Clock>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store with the default TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    /// Create a store whose records expire `ttl` after their last write
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
            clock: Arc::new(SystemClock),
        }
    }

    /// Read record ages from `clock` instead of wall time
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn is_live(&self, stored: &StoredSession, now: Timestamp) -> bool {
        now.millis_since(&stored.written_at) < self.ttl_ms
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        let now = self.clock.now();
        self.sessions
            .read()
            .await
            .values()
            .filter(|stored| self.is_live(stored, now))
            .count()
    }

    /// True when no live sessions are stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether a live record exists for `id` (as opposed to an implicit empty one)
    pub async fn contains(&self, id: SessionId) -> bool {
        let now = self.clock.now();
        self.sessions
            .read()
            .await
            .get(&id)
            .is_some_and(|stored| self.is_live(stored, now))
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("ttl_ms", &self.ttl_ms)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<HandoffSession, SessionStoreError> {
        let now = self.clock.now();
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(&id)
            .filter(|stored| self.is_live(stored, now))
            .map(|stored| stored.session.clone())
            .unwrap_or_else(|| HandoffSession::new(id)))
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.contains(id).await)
    }

    async fn save(&self, session: &HandoffSession) -> Result<(), SessionStoreError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, stored| self.is_live(stored, now));
        sessions.insert(
            session.id(),
            StoredSession {
                session: session.clone(),
                written_at: now,
            },
        );
        Ok(())
    }

    async fn destroy(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}
