//! HTTP adapter for payment webhook endpoints.
//!
//! - `POST /api/webhooks/stripe` - Verify and relay a Stripe webhook
//! - `GET /api/webhooks/stripe` - Liveness probe (no auth)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{WebhookApiError, WebhookAppState, SIGNATURE_HEADER};
pub use routes::{webhook_routes, webhooks_router, WEBHOOK_ROUTE};
