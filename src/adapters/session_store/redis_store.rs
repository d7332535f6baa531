//! Redis-backed session store for production deployments.
//!
//! Each session is a JSON document under `cryptgate:session:<id>`, written
//! with `SET .. EX` so abandoned sessions expire on their own. Token windows
//! are still enforced by the lifecycle; the TTL only bounds storage.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::domain::foundation::SessionId;
use crate::domain::handoff::HandoffSession;
use crate::ports::{SessionStore, SessionStoreError};

const KEY_PREFIX: &str = "cryptgate:session";

/// Redis session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    ttl: Duration,
}

impl RedisSessionStore {
    /// Create a store whose records expire `ttl` after their last write.
    pub fn new(conn: MultiplexedConnection, ttl: Duration) -> Self {
        Self { conn, ttl }
    }

    /// Open a multiplexed connection to `url`, giving up after `timeout`.
    pub async fn connect(url: &str, timeout: Duration, ttl: Duration) -> Result<Self, SessionStoreError> {
        let client = redis::Client::open(url).map_err(|e| SessionStoreError::Backend(e.to_string()))?;
        let conn = tokio::time::timeout(timeout, client.get_multiplexed_tokio_connection())
            .await
            .map_err(|_| SessionStoreError::Backend(format!("connection timed out after {:?}", timeout)))?
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(Self::new(conn, ttl))
    }

    /// Returns the Redis key for a session.
    pub fn key_for(id: SessionId) -> String {
        format!("{}:{}", KEY_PREFIX, id)
    }

    fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs().max(1)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: SessionId) -> Result<HandoffSession, SessionStoreError> {
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn
            .get(Self::key_for(id))
            .await
            .map_err(|e: redis::RedisError| SessionStoreError::Backend(e.to_string()))?;

        match raw {
            Some(json) => serde_json::from_str(&json).map_err(|e| SessionStoreError::Serialization {
                id,
                reason: e.to_string(),
            }),
            None => Ok(HandoffSession::new(id)),
        }
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        let mut conn = self.conn.clone();

        conn.exists(Self::key_for(id))
            .await
            .map_err(|e: redis::RedisError| SessionStoreError::Backend(e.to_string()))
    }

    async fn save(&self, session: &HandoffSession) -> Result<(), SessionStoreError> {
        let id = session.id();
        let json = serde_json::to_string(session).map_err(|e| SessionStoreError::Serialization {
            id,
            reason: e.to_string(),
        })?;

        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(Self::key_for(id))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs())
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn destroy(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(Self::key_for(id))
            .await
            .map_err(|e: redis::RedisError| SessionStoreError::DestroyFailed {
                id,
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Round-trip tests against a live server live outside the unit suite;
    // they need a running Redis instance.

    #[test]
    fn key_is_namespaced_by_session_id() {
        let id: SessionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(
            RedisSessionStore::key_for(id),
            "cryptgate:session:550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
