//! Session Store Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Process-local map (tests, single instance)
//! - **RedisSessionStore** - JSON records with TTL (production)
//!
//! ## Usage
//!
//! ```ignore
//! use cryptgate::adapters::session_store::{InMemorySessionStore, RedisSessionStore};
//!
//! // Testing / single process
//! let store = InMemorySessionStore::with_ttl(Duration::from_secs(86_400));
//!
//! // Production
//! let store = RedisSessionStore::new(conn, Duration::from_secs(86_400));
//! ```

mod in_memory;
mod redis_store;

pub use in_memory::InMemorySessionStore;
pub use redis_store::RedisSessionStore;
