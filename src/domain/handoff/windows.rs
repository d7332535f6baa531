//! Time windows measured from token issuance.

use serde::Deserialize;

use crate::domain::foundation::Timestamp;

use super::errors::RejectReason;
use super::session::IssuedToken;

/// Default window for the immediate JSON submission (`/data`).
pub const DEFAULT_PAYLOAD_WINDOW_MS: u64 = 30_000;

/// Default window for the text upload that triggers the script (`/uploadText`).
pub const DEFAULT_UPLOAD_WINDOW_MS: u64 = 120_000;

/// Longest window either path may be configured with (one day).
pub const MAX_WINDOW_MS: u64 = 86_400_000;

/// The two independently tuned validity windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWindows {
    pub payload_ms: u64,
    pub upload_ms: u64,
}

impl TokenWindows {
    pub fn new(payload_ms: u64, upload_ms: u64) -> Self {
        Self {
            payload_ms,
            upload_ms,
        }
    }

    /// Payload submissions are accepted while `elapsed < payload_ms`.
    pub fn check_payload(&self, issued: &IssuedToken, now: Timestamp) -> Result<(), RejectReason> {
        if issued.elapsed_millis(now) < saturating_millis(self.payload_ms) {
            Ok(())
        } else {
            Err(RejectReason::WindowExceeded)
        }
    }

    /// Upload submissions expire when nothing was issued or `elapsed > upload_ms`.
    pub fn upload_expired(&self, issued_at: Option<Timestamp>, now: Timestamp) -> bool {
        match issued_at {
            None => true,
            Some(issued_at) => now.millis_since(&issued_at) > saturating_millis(self.upload_ms),
        }
    }
}

fn saturating_millis(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

impl Default for TokenWindows {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD_WINDOW_MS, DEFAULT_UPLOAD_WINDOW_MS)
    }
}

/// What happens to a session whose token outlived its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Destroy the session as soon as expiry is detected, on either path.
    #[default]
    Destroy,
    /// Leave the expired record in place until re-issue or store TTL.
    Retain,
}
