//! Normalized envelope relayed to the internal backend.

use serde::{Deserialize, Serialize};

use super::event::ProviderEvent;

/// Minimal, stable shape derived from a verified provider event.
///
/// `event_id` is the provider's id, verbatim; the backend uses it for
/// idempotent handling. `data` is the provider payload, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEnvelope {
    pub event_id: String,
    pub event_type: String,
    pub created: i64,
    pub data: serde_json::Value,
}

impl NormalizedEnvelope {
    /// Build the envelope for a verified event.
    pub fn from_event(event: &ProviderEvent) -> Self {
        Self {
            event_id: event.id.clone(),
            event_type: event.event_type.clone(),
            created: event.created,
            data: event.data.clone(),
        }
    }

    /// Serialize to the exact bytes that are signed and sent.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
