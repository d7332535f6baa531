//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Keyed session records (in-memory, Redis)
//! - `TokenGenerator` - CSPRNG-backed token minting
//! - `Clock` - Current time, swappable in tests
//! - `PayloadProcessor` - Downstream text-processing collaborator

mod clock;
mod payload_processor;
mod session_store;
mod token_generator;

pub use clock::Clock;
pub use payload_processor::{
    JobKind, PayloadProcessor, ProcessingJob, ProcessingOutput, ProcessorError, ProcessorStdout,
    TEXT_MODE_ARG,
};
pub use session_store::{SessionStore, SessionStoreError};
pub use token_generator::TokenGenerator;
