//! Handoff application services.
//!
//! - `TokenLifecycle` - issue, validate and consume one-time tokens
//! - `SessionLocks` - per-session serialization of mutating transitions
//! - `ProcessingDispatcher` - spawns accepted jobs off the request path

mod dispatcher;
mod lifecycle;
mod session_locks;

pub use dispatcher::ProcessingDispatcher;
pub use lifecycle::{SubmitOutcome, TokenLifecycle, UploadOutcome, ValidationOutcome};
pub use session_locks::SessionLocks;
