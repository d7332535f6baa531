//! Application layer - Use cases over the domain and ports.
//!
//! Services here own the transition rules; HTTP adapters only translate
//! their outcomes into responses.

pub mod handoff;

pub use handoff::{
    ProcessingDispatcher, SubmitOutcome, TokenLifecycle, UploadOutcome, ValidationOutcome,
};
