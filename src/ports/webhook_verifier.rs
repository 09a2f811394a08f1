//! WebhookVerifier port - Interface for authenticating inbound webhooks.
//!
//! Verification is pure: no I/O, no side effects beyond returning the
//! verified event or failing.

use crate::domain::webhook::{ProviderEvent, StripeWebhookVerifier, WebhookError};

/// Port for verifying inbound webhook deliveries.
///
/// Implementations receive the untouched request body. The body must never be
/// re-encoded before verification.
pub trait WebhookVerifier: Send + Sync {
    /// Verify the signature over `payload` and parse the event.
    ///
    /// `signature` is `None` when the request carried no signature header.
    fn verify(&self, payload: &[u8], signature: Option<&str>)
        -> Result<ProviderEvent, WebhookError>;
}

impl WebhookVerifier for StripeWebhookVerifier {
    fn verify(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<ProviderEvent, WebhookError> {
        let signature = signature.ok_or(WebhookError::MissingSignature)?;
        self.verify_and_parse(payload, signature)
    }
}
