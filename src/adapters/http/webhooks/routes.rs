//! Axum router configuration for webhook endpoints.

use axum::{routing::get, Router};

use super::handlers::{handle_stripe_webhook, probe_stripe_webhook, WebhookAppState};

/// Public path of the Stripe webhook endpoint.
pub const WEBHOOK_ROUTE: &str = "/api/webhooks/stripe";

/// Create the Stripe webhook router.
///
/// Webhooks don't require user authentication; they're verified via signature.
///
/// # Routes
/// - `POST /stripe` - Verify and relay Stripe webhooks
/// - `GET /stripe` - Liveness probe
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route(
        "/stripe",
        get(probe_stripe_webhook).post(handle_stripe_webhook),
    )
}

/// Create the complete webhook module router, mounted at `/api/webhooks`.
///
/// # Example
///
/// ```ignore
/// let app = webhooks_router().with_state(WebhookAppState::new(verifier, forwarder));
/// ```
pub fn webhooks_router() -> Router<WebhookAppState> {
    Router::new().nest("/api/webhooks", webhook_routes())
}
