//! EventForwarder port - Interface for relaying normalized events onward.
//!
//! Forwarding is best-effort and at-most-once. Implementations report what
//! happened through `ForwardOutcome` and never return an error; callers log
//! the outcome and carry on. No retry, no queue.

use async_trait::async_trait;
use std::fmt;

use crate::domain::webhook::NormalizedEnvelope;

/// Port for relaying verified events to the internal backend.
#[async_trait]
pub trait EventForwarder: Send + Sync {
    /// Deliver a single envelope.
    async fn forward(&self, envelope: &NormalizedEnvelope) -> ForwardOutcome;
}

/// What happened to a forward attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Backend answered with a 2xx status.
    Delivered { status: u16 },

    /// Backend answered with a non-2xx status.
    Rejected { status: u16 },

    /// Request never completed (connect error, timeout, ...).
    Failed { reason: String },

    /// Forwarder refused to send.
    Skipped { reason: String },
}

impl ForwardOutcome {
    /// True only when the backend accepted the envelope.
    pub fn is_delivered(&self) -> bool {
        matches!(self, ForwardOutcome::Delivered { .. })
    }
}

impl fmt::Display for ForwardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { status } => write!(f, "delivered ({})", status),
            Self::Rejected { status } => write!(f, "rejected ({})", status),
            Self::Failed { reason } => write!(f, "failed: {}", reason),
            Self::Skipped { reason } => write!(f, "skipped: {}", reason),
        }
    }
}
