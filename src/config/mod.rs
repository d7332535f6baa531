//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CRYPTGATE` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! in-memory development server on port 3000.
//!
//! # Example
//!
//! ```no_run
//! use cryptgate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod handoff;
mod processor;
mod redis;
mod server;
mod session;

pub use error::{ConfigError, ValidationError};
pub use handoff::HandoffConfig;
pub use processor::ProcessorConfig;
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use session::{SessionBackend, SessionConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, limits, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session cookie and storage backend
    #[serde(default)]
    pub session: SessionConfig,

    /// Redis connection, used when `session.backend = redis`
    #[serde(default)]
    pub redis: RedisConfig,

    /// Token windows and expiry handling
    #[serde(default)]
    pub handoff: HandoffConfig,

    /// Downstream text-processing script
    #[serde(default)]
    pub processor: ProcessorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CRYPTGATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CRYPTGATE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CRYPTGATE__SESSION__BACKEND=redis` -> `session.backend = redis`
    /// - `CRYPTGATE__HANDOFF__PAYLOAD_WINDOW_MS=15000` -> `handoff.payload_window_ms = 15000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CRYPTGATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Redis settings are only checked when Redis is the session backend.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.session.validate()?;
        if self.session.backend == SessionBackend::Redis {
            self.redis.validate()?;
        }
        self.handoff.validate()?;
        self.processor.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
