//! Integration tests for the webhook relay HTTP surface.
//!
//! These tests drive the full application router:
//! 1. Signed provider deliveries are acknowledged and relayed
//! 2. Unsigned or tampered deliveries are rejected before any relay
//! 3. Relayed envelopes reach a real HTTP backend with a verifiable signature

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use tower::ServiceExt;

use payment_relay::adapters::forwarding::{
    sign_body, HttpEventForwarder, HttpForwarderConfig,
};
use payment_relay::adapters::http::{app_router, WebhookAppState};
use payment_relay::domain::webhook::{NormalizedEnvelope, StripeWebhookVerifier};
use payment_relay::ports::{EventForwarder, ForwardOutcome};

const WEBHOOK_SECRET: &str = "whsec_integration_secret";
const FORWARDING_SECRET: &str = "relay-integration-secret";
const WEBHOOK_ROUTE: &str = "/api/webhooks/stripe";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Forwarder that records envelopes and returns a fixed outcome.
struct RecordingForwarder {
    forwarded: Mutex<Vec<NormalizedEnvelope>>,
    outcome: ForwardOutcome,
}

impl RecordingForwarder {
    fn returning(outcome: ForwardOutcome) -> Arc<Self> {
        Arc::new(Self {
            forwarded: Mutex::new(Vec::new()),
            outcome,
        })
    }

    fn delivered() -> Arc<Self> {
        Self::returning(ForwardOutcome::Delivered { status: 200 })
    }

    fn forwarded(&self) -> Vec<NormalizedEnvelope> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventForwarder for RecordingForwarder {
    async fn forward(&self, envelope: &NormalizedEnvelope) -> ForwardOutcome {
        self.forwarded.lock().unwrap().push(envelope.clone());
        self.outcome.clone()
    }
}

fn app_with(forwarder: Arc<dyn EventForwarder>) -> Router {
    let state = WebhookAppState::new(
        Arc::new(StripeWebhookVerifier::new(WEBHOOK_SECRET)),
        forwarder,
    );
    app_router(state, Duration::from_secs(30))
}

fn stripe_signature(payload: &str, timestamp: i64) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(WEBHOOK_SECRET.as_bytes()).unwrap();
    mac.update(format!("{}.{}", timestamp, payload).as_bytes());
    format!(
        "t={},v1={}",
        timestamp,
        hex::encode(mac.finalize().into_bytes())
    )
}

fn event_payload(id: &str, event_type: &str) -> String {
    json!({
        "id": id,
        "object": "event",
        "api_version": "2023-10-16",
        "type": event_type,
        "created": 1704067200,
        "livemode": false,
        "data": {
            "object": {
                "id": "cs_test_a1",
                "customer": "cus_42",
                "metadata": { "user_id": "usr_7" }
            }
        }
    })
    .to_string()
}

fn webhook_request(payload: &str, signature: Option<String>) -> Request<Body> {
    let mut builder = Request::post(WEBHOOK_ROUTE).header("content-type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header("Stripe-Signature", signature);
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

fn signed_request(payload: &str) -> Request<Body> {
    let signature = stripe_signature(payload, chrono::Utc::now().timestamp());
    webhook_request(payload, Some(signature))
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Acknowledgement and Relay
// =============================================================================

#[tokio::test]
async fn signed_checkout_completion_is_acknowledged_and_relayed_once() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());

    let response = app
        .oneshot(signed_request(&event_payload(
            "evt_123",
            "checkout.session.completed",
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "ok": true, "event_id": "evt_123" })
    );
    let forwarded = forwarder.forwarded();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].event_id, "evt_123");
    assert_eq!(forwarded[0].event_type, "checkout.session.completed");
    assert_eq!(forwarded[0].data["object"]["metadata"]["user_id"], "usr_7");
}

#[tokio::test]
async fn unrecognized_event_is_acknowledged_without_relay() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());

    let response = app
        .oneshot(signed_request(&event_payload("evt_pi", "payment_intent.succeeded")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["event_id"], "evt_pi");
    assert!(forwarder.forwarded().is_empty());
}

#[tokio::test]
async fn backend_failure_does_not_change_acknowledgement() {
    let forwarder = RecordingForwarder::returning(ForwardOutcome::Failed {
        reason: "connection refused".to_string(),
    });
    let app = app_with(forwarder.clone());

    let response = app
        .oneshot(signed_request(&event_payload("evt_sub", "customer.subscription.deleted")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "ok": true, "event_id": "evt_sub" })
    );
    assert_eq!(forwarder.forwarded().len(), 1);
}

// =============================================================================
// Rejection
// =============================================================================

#[tokio::test]
async fn missing_signature_header_is_rejected() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());

    let response = app
        .oneshot(webhook_request(
            &event_payload("evt_123", "checkout.session.completed"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "Invalid signature");
    assert!(forwarder.forwarded().is_empty());
}

#[tokio::test]
async fn tampered_body_is_rejected() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());
    let original = event_payload("evt_paid", "invoice.paid");
    let signature = stripe_signature(&original, chrono::Utc::now().timestamp());
    let tampered = original.replace("cus_42", "cus_43");

    let response = app
        .oneshot(webhook_request(&tampered, Some(signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid signature");
    assert_eq!(body["detail"], "Signature mismatch");
    assert!(forwarder.forwarded().is_empty());
}

#[tokio::test]
async fn replayed_delivery_is_rejected() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());
    let payload = event_payload("evt_old", "invoice.paid");
    let stale = chrono::Utc::now().timestamp() - 3600;

    let response = app
        .oneshot(webhook_request(&payload, Some(stripe_signature(&payload, stale))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(forwarder.forwarded().is_empty());
}

#[tokio::test]
async fn signed_non_event_body_is_handler_failure() {
    let forwarder = RecordingForwarder::delivered();
    let app = app_with(forwarder.clone());

    let response = app.oneshot(signed_request("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_json(response).await["error"], "handler_failed");
    assert!(forwarder.forwarded().is_empty());
}

#[tokio::test]
async fn probe_reports_route() {
    let app = app_with(RecordingForwarder::delivered());

    let response = app
        .oneshot(Request::get(WEBHOOK_ROUTE).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "ok": true, "route": "/api/webhooks/stripe" })
    );
}

// =============================================================================
// End-to-end Relay
// =============================================================================

#[derive(Clone, Default)]
struct Backend {
    received: Arc<Mutex<Vec<(HeaderMap, Bytes)>>>,
}

async fn backend_receive(
    State(backend): State<Backend>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    backend.received.lock().unwrap().push((headers, body));
    StatusCode::OK
}

#[tokio::test]
async fn relayed_envelope_reaches_backend_with_verifiable_signature() {
    let backend = Backend::default();
    let backend_app = Router::new()
        .route("/internal/webhooks/stripe", post(backend_receive))
        .with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend_app).await.unwrap();
    });

    let forwarder = HttpEventForwarder::new(HttpForwarderConfig::new(
        format!("http://{}/internal/webhooks/stripe", addr),
        FORWARDING_SECRET,
    ))
    .unwrap();
    let app = app_with(Arc::new(forwarder));
    let payload = event_payload("evt_e2e", "invoice.payment_failed");

    let response = app.oneshot(signed_request(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let received = backend.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (headers, body) = &received[0];
    assert_eq!(headers["x-webhook-source"], "stripe");
    assert_eq!(headers["x-stripe-event-id"], "evt_e2e");
    assert_eq!(
        headers["x-webhook-signature"].to_str().unwrap(),
        sign_body(FORWARDING_SECRET.as_bytes(), body)
    );

    let envelope: Value = serde_json::from_slice(body).unwrap();
    let original: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(envelope["event_id"], "evt_e2e");
    assert_eq!(envelope["event_type"], "invoice.payment_failed");
    assert_eq!(envelope["created"], 1704067200);
    assert_eq!(envelope["data"], original["data"]);
}

// =============================================================================
// Slow Backend
// =============================================================================

async fn slow_backend_receive() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

#[tokio::test]
async fn slow_backend_still_gets_acknowledgement_within_request_timeout() {
    let backend_app = Router::new().route("/internal/webhooks/stripe", post(slow_backend_receive));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend_app).await.unwrap();
    });

    let forwarder = HttpEventForwarder::new(
        HttpForwarderConfig::new(
            format!("http://{}/internal/webhooks/stripe", addr),
            FORWARDING_SECRET,
        )
        .with_timeout(Duration::from_secs(1)),
    )
    .unwrap();
    let state = WebhookAppState::new(
        Arc::new(StripeWebhookVerifier::new(WEBHOOK_SECRET)),
        Arc::new(forwarder),
    );
    let app = app_router(state, Duration::from_secs(3));

    let response = app
        .oneshot(signed_request(&event_payload(
            "evt_slow",
            "checkout.session.completed",
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "ok": true, "event_id": "evt_slow" })
    );
}
