//! HTTP adapters - REST API implementations.

pub mod router;
pub mod webhooks;

pub use router::app_router;
pub use webhooks::{webhooks_router, WebhookAppState};
