//! Application router with the cross-cutting HTTP layers applied.

use std::any::Any;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::webhooks::{webhooks_router, WebhookAppState, WebhookErrorResponse};

/// Build the full service router.
///
/// Requests are traced, bounded by `request_timeout`, and a panic in a
/// handler is reported as `handler_failed` instead of dropping the connection.
pub fn app_router(state: WebhookAppState, request_timeout: Duration) -> Router {
    webhooks_router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(detail = %detail, "Webhook handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(WebhookErrorResponse::handler_failed(detail)),
    )
        .into_response()
}
