//! Internal forwarding configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how verified events are relayed to the internal backend
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardingConfig {
    /// Base URL of the internal backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Path appended to `backend_url` for webhook deliveries
    #[serde(default = "default_forward_path")]
    pub forward_path: String,

    /// Shared secret used to sign forwarded envelopes.
    ///
    /// When empty the forwarder refuses to send.
    #[serde(default)]
    pub forwarding_secret: String,

    /// Timeout for a single forward request, in seconds
    #[serde(default = "default_forward_timeout")]
    pub forward_timeout_secs: u64,
}

impl ForwardingConfig {
    /// Full URL forwarded envelopes are POSTed to
    pub fn forward_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_url.trim_end_matches('/'),
            self.forward_path
        )
    }

    pub fn forward_timeout(&self) -> Duration {
        Duration::from_secs(self.forward_timeout_secs)
    }

    /// Whether a forwarding secret has been configured
    pub fn has_secret(&self) -> bool {
        !self.forwarding_secret.is_empty()
    }

    /// Validate forwarding configuration
    ///
    /// A missing secret is not a validation error; the forwarder fails closed instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if !self.forward_path.starts_with('/') {
            return Err(ValidationError::InvalidForwardPath);
        }
        if self.forward_timeout_secs == 0 || self.forward_timeout_secs > 120 {
            return Err(ValidationError::InvalidForwardTimeout);
        }
        Ok(())
    }
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            forward_path: default_forward_path(),
            forwarding_secret: String::new(),
            forward_timeout_secs: default_forward_timeout(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_forward_path() -> String {
    "/internal/webhooks/stripe".to_string()
}

fn default_forward_timeout() -> u64 {
    10
}
