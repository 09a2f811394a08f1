//! HTTP forwarder for normalized webhook envelopes.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpForwarderConfig::from_config(&app_config.forwarding);
//! let forwarder = HttpEventForwarder::new(config)?;
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::ForwardingConfig;
use crate::domain::webhook::NormalizedEnvelope;
use crate::ports::{EventForwarder, ForwardOutcome};

use super::signing::sign_body;

/// Provider name sent in `X-Webhook-Source`.
const WEBHOOK_SOURCE: &str = "stripe";

const SOURCE_HEADER: &str = "X-Webhook-Source";
const SIGNATURE_HEADER: &str = "X-Webhook-Signature";
const EVENT_ID_HEADER: &str = "X-Stripe-Event-Id";

/// Forwarder configuration.
#[derive(Clone)]
pub struct HttpForwarderConfig {
    /// Absolute URL envelopes are POSTed to.
    url: String,

    /// Signing secret shared with the backend.
    secret: SecretString,

    /// Per-request timeout.
    timeout: Duration,
}

impl HttpForwarderConfig {
    /// Create a new forwarder configuration with a 10 second timeout.
    pub fn new(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: SecretString::new(secret.into()),
            timeout: Duration::from_secs(10),
        }
    }

    /// Build from the `forwarding` configuration section.
    pub fn from_config(config: &ForwardingConfig) -> Self {
        Self::new(config.forward_url(), config.forwarding_secret.clone())
            .with_timeout(config.forward_timeout())
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Relays envelopes to the internal backend over HTTP.
pub struct HttpEventForwarder {
    config: HttpForwarderConfig,
    http_client: reqwest::Client,
}

impl HttpEventForwarder {
    /// Create a new forwarder with the given configuration.
    pub fn new(config: HttpForwarderConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl EventForwarder for HttpEventForwarder {
    async fn forward(&self, envelope: &NormalizedEnvelope) -> ForwardOutcome {
        let secret = self.config.secret.expose_secret();
        if secret.is_empty() {
            tracing::error!(
                event_id = %envelope.event_id,
                "Forwarding secret not configured, refusing to forward"
            );
            return ForwardOutcome::Skipped {
                reason: "forwarding secret not configured".to_string(),
            };
        }

        // The exact bytes that are signed are the bytes that are sent.
        let body = match envelope.to_bytes() {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(event_id = %envelope.event_id, error = %e, "Failed to serialize envelope");
                return ForwardOutcome::Skipped {
                    reason: format!("serialization failed: {}", e),
                };
            }
        };
        let signature = sign_body(secret.as_bytes(), &body);

        let result = self
            .http_client
            .post(&self.config.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(SOURCE_HEADER, WEBHOOK_SOURCE)
            .header(SIGNATURE_HEADER, signature)
            .header(EVENT_ID_HEADER, envelope.event_id.as_str())
            .body(body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                let status = response.status().as_u16();
                tracing::info!(
                    event_id = %envelope.event_id,
                    event_type = %envelope.event_type,
                    status,
                    "Forwarded webhook event"
                );
                ForwardOutcome::Delivered { status }
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(
                    event_id = %envelope.event_id,
                    event_type = %envelope.event_type,
                    status,
                    "Internal backend rejected forwarded event"
                );
                ForwardOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::warn!(
                    event_id = %envelope.event_id,
                    event_type = %envelope.event_type,
                    error = %e,
                    timeout = e.is_timeout(),
                    "Failed to forward webhook event"
                );
                ForwardOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
