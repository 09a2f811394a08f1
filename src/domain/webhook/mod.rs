//! Webhook domain module.
//!
//! Verification, typing and normalization of inbound payment provider events.
//!
//! # Module Structure
//!
//! - `errors` - WebhookError with HTTP status mapping
//! - `event` - ProviderEvent as parsed from the verified body
//! - `event_type` - Closed set of recognized event types
//! - `envelope` - NormalizedEnvelope relayed to the internal backend
//! - `verifier` - Stripe-Signature parsing and HMAC verification

mod envelope;
mod errors;
mod event;
mod event_type;
mod verifier;

pub use envelope::NormalizedEnvelope;
pub use errors::WebhookError;
pub use event::ProviderEvent;
pub use event_type::WebhookEventType;
pub use verifier::{SignatureHeader, StripeWebhookVerifier, DEFAULT_TOLERANCE_SECS};

#[cfg(test)]
pub(crate) use event::ProviderEventBuilder;
#[cfg(test)]
pub(crate) use verifier::compute_test_signature;
