//! HTTP DTOs for webhook endpoints.
//!
//! Response bodies follow the provider-facing contract exactly; Stripe only
//! looks at the status code, but operators read the bodies in the dashboard.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Acknowledgement of a verified delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAckResponse {
    pub ok: bool,
    pub event_id: String,
}

impl WebhookAckResponse {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            event_id: event_id.into(),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteProbeResponse {
    pub ok: bool,
    pub route: String,
}

/// Error body: `{ "error": ..., "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookErrorResponse {
    /// Stable error label.
    pub error: String,
    /// Human-readable detail.
    pub detail: String,
}

impl WebhookErrorResponse {
    /// Label used for every authenticity failure.
    pub const INVALID_SIGNATURE: &'static str = "Invalid signature";

    /// Label used when the handler itself failed.
    pub const HANDLER_FAILED: &'static str = "handler_failed";

    pub fn invalid_signature(detail: impl Into<String>) -> Self {
        Self {
            error: Self::INVALID_SIGNATURE.to_string(),
            detail: detail.into(),
        }
    }

    pub fn handler_failed(detail: impl Into<String>) -> Self {
        Self {
            error: Self::HANDLER_FAILED.to_string(),
            detail: detail.into(),
        }
    }
}
