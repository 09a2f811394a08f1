//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYMENT_RELAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payment_relay::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//! ```

mod error;
mod forwarding;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use forwarding::ForwardingConfig;
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Inbound webhook configuration (Stripe)
    pub payment: PaymentConfig,

    /// Internal backend forwarding
    #[serde(default)]
    pub forwarding: ForwardingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYMENT_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYMENT_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAYMENT_RELAY__PAYMENT__STRIPE_WEBHOOK_SECRET=...` -> `payment.stripe_webhook_secret = ...`
    /// - `PAYMENT_RELAY__FORWARDING__BACKEND_URL=...` -> `forwarding.backend_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYMENT_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if loading fails and
    /// `ConfigError::ValidationFailed` if a value is invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The forward is awaited inside the inbound request, so its timeout must
    /// expire before the request timeout does.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        self.forwarding.validate()?;
        if self.forwarding.forward_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::ForwardTimeoutExceedsRequestTimeout {
                forward_secs: self.forwarding.forward_timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
