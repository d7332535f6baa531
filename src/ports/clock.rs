//! Clock port.
//!
//! Every window check reads "now" through this port so tests can move time
//! deterministically.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
