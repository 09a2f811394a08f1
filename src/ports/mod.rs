//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WebhookVerifier` - Authenticates inbound provider webhooks
//! - `EventForwarder` - Relays normalized events to the internal backend

mod event_forwarder;
mod webhook_verifier;

pub use event_forwarder::{EventForwarder, ForwardOutcome};
pub use webhook_verifier::WebhookVerifier;
