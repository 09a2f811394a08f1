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

    #[error("Invalid host/port combination: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Stripe webhook secret format")]
    InvalidStripeWebhookSecret,

    #[error("Invalid webhook tolerance (max 3600 seconds)")]
    InvalidWebhookTolerance,

    #[error("Invalid backend URL (must be http or https)")]
    InvalidBackendUrl,

    #[error("Invalid forward path (must start with '/')")]
    InvalidForwardPath,

    #[error("Invalid forward timeout")]
    InvalidForwardTimeout,

    #[error("Forward timeout ({forward_secs}s) must be shorter than request timeout ({request_secs}s)")]
    ForwardTimeoutExceedsRequestTimeout { forward_secs: u64, request_secs: u64 },
}
