//! Webhook handlers.
//!
//! ## Commands
//! - Relaying a verified payment webhook to the internal backend

mod relay_webhook;

pub use relay_webhook::{
    RelayDisposition, RelayWebhookCommand, RelayWebhookHandler, RelayWebhookResult,
};
