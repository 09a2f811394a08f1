//! Internal backend forwarding adapter.
//!
//! Implements the `EventForwarder` port over HTTP:
//! - Envelope serialized once, signed with HMAC-SHA256, POSTed as-is
//! - Signature in `X-Webhook-Signature: sha256=<hex>`
//! - Provider event id in `X-Stripe-Event-Id`
//!
//! # Configuration
//!
//! - `backend_url` + `forward_path`: target endpoint
//! - `forwarding_secret`: signing key; when empty nothing is sent
//! - `forward_timeout_secs`: per-request timeout

mod http_forwarder;
mod signing;

pub use http_forwarder::{HttpEventForwarder, HttpForwarderConfig};
pub use signing::{sign_body, SIGNATURE_PREFIX};
