//! Adapters - Implementations of port interfaces.
//!
//! - `forwarding` - Signed HTTP relay to the internal backend
//! - `http` - Axum endpoints for provider webhooks

pub mod forwarding;
pub mod http;
