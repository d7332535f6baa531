//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, IDs, state machine trait)
//! - `handoff` - One-time token, session record, windows and lifecycle states

pub mod foundation;
pub mod handoff;
