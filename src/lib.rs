//! Payment Relay - Stripe webhook verification and internal forwarding
//!
//! This crate verifies inbound payment provider webhooks, normalizes them into
//! a stable envelope and relays them, signed, to the internal backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
