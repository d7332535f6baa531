//! Handoff module - the session-bound one-time token.
//!
//! A token is issued into a session, may be probed any number of times, and
//! is consumed at most once by a submission that arrives inside its window.

mod errors;
mod session;
mod state;
mod token;
mod windows;

pub use errors::{HandoffError, RejectReason};
pub use session::{HandoffSession, IssuedToken};
pub use state::TokenState;
pub use token::Token;
pub use windows::{
    ExpiryPolicy, TokenWindows, DEFAULT_PAYLOAD_WINDOW_MS, DEFAULT_UPLOAD_WINDOW_MS, MAX_WINDOW_MS,
};
