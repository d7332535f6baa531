//! Session cookie and storage configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where session records are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process-local map; records are lost on restart
    #[default]
    Memory,
    /// Shared Redis instance, records expire after `ttl_secs`
    Redis,
}

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the opaque session id cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Add the `Secure` attribute to the cookie
    #[serde(default)]
    pub cookie_secure: bool,

    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// Lifetime of stored records (Redis) and of the cookie
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let valid_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.');
        if !valid_name {
            return Err(ValidationError::InvalidCookieName(self.cookie_name.clone()));
        }
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            backend: SessionBackend::default(),
            ttl_secs: default_ttl(),
        }
    }
}

fn default_cookie_name() -> String {
    "cryptgate_sid".to_string()
}

fn default_ttl() -> u64 {
    86_400
}
