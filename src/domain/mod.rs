//! Domain layer containing the webhook types and pure verification logic.
//!
//! # Module Organization
//!
//! - `webhook` - Provider events, signature verification and normalization

pub mod webhook;
