//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request body limit must be greater than zero")]
    InvalidBodyLimit,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Invalid session cookie name: {0}")]
    InvalidCookieName(String),

    #[error("Session TTL must be greater than zero")]
    InvalidSessionTtl,

    #[error("Token window {0} must be between 1 ms and one day")]
    InvalidWindow(&'static str),

    #[error("Token length must be between 1 and 64 bytes")]
    InvalidTokenLength,
}
