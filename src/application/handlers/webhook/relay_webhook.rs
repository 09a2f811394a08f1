//! RelayWebhookHandler - Command handler for relaying payment provider webhooks.

use std::sync::Arc;

use crate::domain::webhook::{NormalizedEnvelope, WebhookError, WebhookEventType};
use crate::ports::{EventForwarder, ForwardOutcome, WebhookVerifier};

/// Command to relay a webhook delivery.
#[derive(Debug, Clone)]
pub struct RelayWebhookCommand {
    /// Raw webhook payload, exactly as received.
    pub payload: Vec<u8>,
    /// Webhook signature header, if present.
    pub signature: Option<String>,
}

/// What the relay did with a verified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayDisposition {
    /// Event was normalized and handed to the forwarder.
    Forwarded(ForwardOutcome),
    /// Event type not recognized; acknowledged without action.
    Ignored,
}

/// Result of relaying a verified webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayWebhookResult {
    pub event_id: String,
    pub event_type: WebhookEventType,
    pub disposition: RelayDisposition,
}

/// Handler for relaying payment provider webhooks.
///
/// Verifies the delivery, dispatches on the event type and forwards
/// recognized events. Forwarding outcomes never turn into errors: each
/// delivery is acknowledged once verified.
pub struct RelayWebhookHandler {
    verifier: Arc<dyn WebhookVerifier>,
    forwarder: Arc<dyn EventForwarder>,
}

impl RelayWebhookHandler {
    pub fn new(verifier: Arc<dyn WebhookVerifier>, forwarder: Arc<dyn EventForwarder>) -> Self {
        Self {
            verifier,
            forwarder,
        }
    }

    pub async fn handle(
        &self,
        cmd: RelayWebhookCommand,
    ) -> Result<RelayWebhookResult, WebhookError> {
        // 1. Verify webhook signature and parse event
        let event = self
            .verifier
            .verify(&cmd.payload, cmd.signature.as_deref())
            .map_err(|e| {
                tracing::warn!(error = %e, "Webhook verification failed");
                e
            })?;

        let event_type = event.parsed_type();

        // 2. Process based on event type
        let disposition = match &event_type {
            WebhookEventType::CheckoutSessionCompleted
            | WebhookEventType::SubscriptionCreated
            | WebhookEventType::SubscriptionUpdated
            | WebhookEventType::SubscriptionDeleted
            | WebhookEventType::InvoicePaid
            | WebhookEventType::InvoicePaymentFailed => {
                let envelope = NormalizedEnvelope::from_event(&event);
                let outcome = self.forwarder.forward(&envelope).await;
                if !outcome.is_delivered() {
                    tracing::warn!(
                        event_id = %event.id,
                        event_type = %event_type,
                        outcome = %outcome,
                        "Webhook acknowledged without internal delivery"
                    );
                }
                RelayDisposition::Forwarded(outcome)
            }
            WebhookEventType::Unknown(_) => {
                tracing::debug!(
                    event_id = %event.id,
                    event_type = %event_type,
                    "Ignoring unrecognized webhook event type"
                );
                RelayDisposition::Ignored
            }
        };

        Ok(RelayWebhookResult {
            event_id: event.id,
            event_type,
            disposition,
        })
    }
}
