//! HTTP handlers for webhook endpoints.
//!
//! These handlers connect Axum routes to the relay command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::webhook::{RelayWebhookCommand, RelayWebhookHandler};
use crate::domain::webhook::WebhookError;
use crate::ports::{EventForwarder, WebhookVerifier};

use super::dto::{RouteProbeResponse, WebhookAckResponse, WebhookErrorResponse};
use super::routes::WEBHOOK_ROUTE;

/// Header carrying the provider's signature.
pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the relay's dependencies.
///
/// Cloned for each request; both dependencies are immutable after startup.
#[derive(Clone)]
pub struct WebhookAppState {
    pub verifier: Arc<dyn WebhookVerifier>,
    pub forwarder: Arc<dyn EventForwarder>,
}

impl WebhookAppState {
    pub fn new(verifier: Arc<dyn WebhookVerifier>, forwarder: Arc<dyn EventForwarder>) -> Self {
        Self {
            verifier,
            forwarder,
        }
    }

    pub fn relay_handler(&self) -> RelayWebhookHandler {
        RelayWebhookHandler::new(self.verifier.clone(), self.forwarder.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhook Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/stripe - Verify and relay a Stripe webhook event
pub async fn handle_stripe_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    // Absence is reported by the verifier so it gets the same 400 as a bad signature.
    let signature = match headers.get(SIGNATURE_HEADER) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| WebhookError::MalformedSignature("non-ASCII header".to_string()))?
                .to_string(),
        ),
        None => None,
    };

    let cmd = RelayWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    let result = state.relay_handler().handle(cmd).await?;

    Ok((StatusCode::OK, Json(WebhookAckResponse::new(result.event_id))))
}

/// GET /api/webhooks/stripe - Route liveness probe
pub async fn probe_stripe_webhook() -> impl IntoResponse {
    Json(RouteProbeResponse {
        ok: true,
        route: WEBHOOK_ROUTE.to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let detail = self.0.to_string();
        let body = if self.0.is_signature_failure() {
            WebhookErrorResponse::invalid_signature(detail)
        } else {
            tracing::error!(error = %self.0, "Webhook handler failed");
            WebhookErrorResponse::handler_failed(detail)
        };
        (self.0.status_code(), Json(body)).into_response()
    }
}
