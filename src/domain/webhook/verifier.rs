//! Stripe webhook signature verification.
//!
//! Implements secure verification of Stripe webhook signatures using HMAC-SHA256
//! over the raw request body. Includes timestamp validation to prevent replay attacks.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::PaymentConfig;

use super::event::ProviderEvent;
use super::errors::WebhookError;

/// Default maximum age for webhook events (5 minutes).
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Maximum allowed clock skew for future events (1 minute).
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed components from the Stripe-Signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signatures (HMAC-SHA256). Several are sent while a secret is being rolled.
    pub v1_signatures: Vec<Vec<u8>>,
    /// Optional v0 legacy signature.
    pub v0_signature: Option<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses a Stripe-Signature header string.
    ///
    /// Format: `t=<timestamp>,v1=<signature>[,v1=<signature>][,v0=<legacy>]`
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MissingSignature` for an empty header and
    /// `WebhookError::MalformedSignature` if the header format is invalid.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let header = header.trim();
        if header.is_empty() {
            return Err(WebhookError::MissingSignature);
        }

        let mut timestamp: Option<i64> = None;
        let mut v1_signatures: Vec<Vec<u8>> = Vec::new();
        let mut v0_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| malformed("invalid header format"))?;

            match key.trim() {
                "t" => {
                    timestamp = Some(
                        value
                            .trim()
                            .parse()
                            .map_err(|_| malformed("invalid timestamp"))?,
                    );
                }
                "v1" => {
                    v1_signatures.push(
                        hex::decode(value.trim())
                            .map_err(|_| malformed("invalid v1 signature hex"))?,
                    );
                }
                "v0" => {
                    v0_signature = Some(
                        hex::decode(value.trim())
                            .map_err(|_| malformed("invalid v0 signature hex"))?,
                    );
                }
                _ => {
                    // Ignore unknown fields for forward compatibility
                }
            }
        }

        let timestamp = timestamp.ok_or_else(|| malformed("missing timestamp"))?;
        if v1_signatures.is_empty() {
            return Err(malformed("missing v1 signature"));
        }

        Ok(SignatureHeader {
            timestamp,
            v1_signatures,
            v0_signature,
        })
    }
}

fn malformed(detail: &str) -> WebhookError {
    WebhookError::MalformedSignature(detail.to_string())
}

/// Verifier for Stripe webhook signatures.
pub struct StripeWebhookVerifier {
    /// The webhook signing secret from Stripe dashboard.
    secret: SecretString,
    /// Maximum event age in seconds; zero disables the age check.
    tolerance_secs: i64,
    /// Reject test mode events.
    require_livemode: bool,
}

impl StripeWebhookVerifier {
    /// Creates a new verifier with the given webhook secret and default tolerance.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            require_livemode: false,
        }
    }

    /// Creates a verifier from the payment configuration section.
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_webhook_secret.clone())
            .with_tolerance_secs(config.webhook_tolerance_secs)
            .with_require_livemode(config.require_livemode)
    }

    /// Set the replay window. Zero disables the age check.
    pub fn with_tolerance_secs(mut self, tolerance_secs: u64) -> Self {
        self.tolerance_secs = i64::try_from(tolerance_secs).unwrap_or(i64::MAX);
        self
    }

    /// Require livemode events.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }

    /// Verifies the webhook signature and parses the event.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the signature header
    /// 2. Compute expected signature over `"{t}.{raw body}"` using HMAC-SHA256
    /// 3. Compare against every v1 signature using constant-time comparison
    /// 4. Validate timestamp is within acceptable range
    /// 5. Parse the JSON payload into a `ProviderEvent`
    ///
    /// # Errors
    ///
    /// - `MissingSignature` / `MalformedSignature` - Header absent or unparseable
    /// - `InvalidSignature` - No signature matches
    /// - `TimestampOutOfRange` - Event is older than the tolerance
    /// - `InvalidTimestamp` - Event timestamp is in the future
    /// - `TestModeRejected` - Test mode event while livemode is required
    /// - `MalformedPayload` - Authentic body that is not a provider event
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<ProviderEvent, WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        let expected_signature = self.compute_signature(header.timestamp, payload);
        let matched = header
            .v1_signatures
            .iter()
            .any(|candidate| constant_time_compare(&expected_signature, candidate));
        if !matched {
            return Err(WebhookError::InvalidSignature);
        }

        self.validate_timestamp(header.timestamp)?;

        let event: ProviderEvent = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

        if self.require_livemode && !event.is_live() {
            tracing::warn!(event_id = %event.id, "Rejected test mode event");
            return Err(WebhookError::TestModeRejected);
        }

        Ok(event)
    }

    /// Validates that the timestamp is within acceptable bounds.
    fn validate_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let now = chrono::Utc::now().timestamp();
        let age = now.saturating_sub(timestamp);

        if self.tolerance_secs > 0 && age > self.tolerance_secs {
            tracing::warn!(
                event_timestamp = timestamp,
                current_time = now,
                age_secs = age,
                "Webhook event too old - possible replay attack"
            );
            return Err(WebhookError::TimestampOutOfRange);
        }

        if age < -MAX_CLOCK_SKEW_SECS {
            tracing::warn!(
                event_timestamp = timestamp,
                current_time = now,
                "Webhook event from future - clock skew or manipulation"
            );
            return Err(WebhookError::InvalidTimestamp);
        }

        Ok(())
    }

    /// Computes the HMAC-SHA256 signature for the given timestamp and raw payload.
    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a Stripe-style v1 signature for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, timestamp: i64, payload: &str) -> String {
    let signed_payload = format!("{}.{}", timestamp, payload);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(signed_payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
