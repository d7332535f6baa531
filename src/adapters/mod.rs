//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum router, handlers and session cookie middleware
//! - `session_store` - Session persistence (in-memory, Redis)
//! - `token` - CSPRNG token generation
//! - `clock` - System and manual clocks
//! - `processor` - Downstream script invocation

pub mod clock;
pub mod http;
pub mod processor;
pub mod session_store;
pub mod token;

pub use clock::{ManualClock, SystemClock};
pub use processor::{RecordingProcessor, ScriptProcessor};
pub use session_store::{InMemorySessionStore, RedisSessionStore};
pub use token::OsRngTokenGenerator;
