//! Token handoff configuration

use serde::Deserialize;

use crate::adapters::token::DEFAULT_TOKEN_BYTES;
use crate::domain::handoff::{
    ExpiryPolicy, TokenWindows, DEFAULT_PAYLOAD_WINDOW_MS, DEFAULT_UPLOAD_WINDOW_MS, MAX_WINDOW_MS,
};

use super::error::ValidationError;

/// Windows, token size and expiry handling
#[derive(Debug, Clone, Deserialize)]
pub struct HandoffConfig {
    /// Window for `/data` submissions, exclusive
    #[serde(default = "default_payload_window")]
    pub payload_window_ms: u64,

    /// Window for `/uploadText` submissions, inclusive
    #[serde(default = "default_upload_window")]
    pub upload_window_ms: u64,

    /// Entropy bytes per token (hex doubles the visible length)
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,

    /// What to do with a session whose token expired
    #[serde(default)]
    pub expiry_policy: ExpiryPolicy,
}

impl HandoffConfig {
    pub fn windows(&self) -> TokenWindows {
        TokenWindows::new(self.payload_window_ms, self.upload_window_ms)
    }

    /// Validate handoff configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.payload_window_ms == 0 || self.payload_window_ms > MAX_WINDOW_MS {
            return Err(ValidationError::InvalidWindow("payload_window_ms"));
        }
        if self.upload_window_ms == 0 || self.upload_window_ms > MAX_WINDOW_MS {
            return Err(ValidationError::InvalidWindow("upload_window_ms"));
        }
        if self.token_bytes == 0 || self.token_bytes > 64 {
            return Err(ValidationError::InvalidTokenLength);
        }
        Ok(())
    }
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            payload_window_ms: default_payload_window(),
            upload_window_ms: default_upload_window(),
            token_bytes: default_token_bytes(),
            expiry_policy: ExpiryPolicy::default(),
        }
    }
}

fn default_payload_window() -> u64 {
    DEFAULT_PAYLOAD_WINDOW_MS
}

fn default_upload_window() -> u64 {
    DEFAULT_UPLOAD_WINDOW_MS
}

fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}
