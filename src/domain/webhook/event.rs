//! Stripe webhook event as received from the provider.
//!
//! Only the envelope fields are typed. The `data` object is kept as raw JSON
//! because its shape depends on the event type and downstream consumers
//! depend on it unchanged.

use serde::{Deserialize, Serialize};

use super::event_type::WebhookEventType;

/// Verified provider event.
///
/// Additional fields from Stripe's full event schema are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Event payload, verbatim.
    pub data: serde_json::Value,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,

    /// API version used to render this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl ProviderEvent {
    /// Parse the event type into a known enum variant.
    pub fn parsed_type(&self) -> WebhookEventType {
        WebhookEventType::parse(&self.event_type)
    }

    /// Returns true if this is a live mode event.
    pub fn is_live(&self) -> bool {
        self.livemode
    }
}

/// Builder for creating test ProviderEvent instances.
#[cfg(test)]
pub struct ProviderEventBuilder {
    id: String,
    event_type: String,
    created: i64,
    data: serde_json::Value,
    livemode: bool,
}

#[cfg(test)]
impl Default for ProviderEventBuilder {
    fn default() -> Self {
        Self {
            id: "evt_test_123".to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: 1704067200,
            data: serde_json::json!({ "object": {} }),
            livemode: false,
        }
    }
}

#[cfg(test)]
impl ProviderEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> ProviderEvent {
        ProviderEvent {
            id: self.id,
            event_type: self.event_type,
            created: self.created,
            data: self.data,
            livemode: self.livemode,
            api_version: Some("2023-10-16".to_string()),
        }
    }
}
