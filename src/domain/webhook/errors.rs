//! Webhook error types for Stripe webhook handling.
//!
//! Defines all error conditions that can occur while verifying and parsing
//! an inbound webhook, with HTTP status code mapping and retryability semantics.

use http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook verification and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// No signature header was sent with the request.
    #[error("Missing signature header")]
    MissingSignature,

    /// Signature header could not be parsed.
    #[error("Malformed signature header: {0}")]
    MalformedSignature(String),

    /// No signature in the header matches the payload.
    #[error("Signature mismatch")]
    InvalidSignature,

    /// Signed timestamp is older than the tolerance window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Signed timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Test mode event received while live mode is required.
    #[error("Test mode events not allowed")]
    TestModeRejected,

    /// Signature was valid but the payload is not a provider event.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl WebhookError {
    /// Returns true if the failure is an authenticity failure.
    ///
    /// These are reported to the provider as "Invalid signature".
    pub fn is_signature_failure(&self) -> bool {
        !matches!(self, WebhookError::MalformedPayload(_))
    }

    /// Returns true if the provider should retry delivering this webhook.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WebhookError::MalformedPayload(_))
    }

    /// Maps the error to an appropriate HTTP status code.
    ///
    /// Status codes determine Stripe's retry behavior:
    /// - 4xx: Client error, no retry
    /// - 5xx: Server error, will retry
    pub fn status_code(&self) -> StatusCode {
        if self.is_signature_failure() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
