//! Closed set of provider event types the relay understands.

use std::fmt;

/// Stripe event types recognized by the relay.
///
/// Anything else is carried as `Unknown` and acknowledged without forwarding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WebhookEventType {
    /// Checkout session completed successfully.
    CheckoutSessionCompleted,
    /// Customer subscription was created.
    SubscriptionCreated,
    /// Customer subscription was updated.
    SubscriptionUpdated,
    /// Customer subscription was deleted.
    SubscriptionDeleted,
    /// Invoice was paid.
    InvoicePaid,
    /// Invoice payment failed.
    InvoicePaymentFailed,
    /// Unrecognized event type (original string preserved).
    Unknown(String),
}

impl WebhookEventType {
    /// Parse event type from the provider string.
    pub fn parse(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            "customer.subscription.created" => Self::SubscriptionCreated,
            "customer.subscription.updated" => Self::SubscriptionUpdated,
            "customer.subscription.deleted" => Self::SubscriptionDeleted,
            "invoice.paid" => Self::InvoicePaid,
            "invoice.payment_failed" => Self::InvoicePaymentFailed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Convert to the provider event type string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CheckoutSessionCompleted => "checkout.session.completed",
            Self::SubscriptionCreated => "customer.subscription.created",
            Self::SubscriptionUpdated => "customer.subscription.updated",
            Self::SubscriptionDeleted => "customer.subscription.deleted",
            Self::InvoicePaid => "invoice.paid",
            Self::InvoicePaymentFailed => "invoice.payment_failed",
            Self::Unknown(s) => s,
        }
    }

    /// Whether events of this type are relayed to the internal backend.
    pub fn is_forwarded(&self) -> bool {
        match self {
            Self::CheckoutSessionCompleted
            | Self::SubscriptionCreated
            | Self::SubscriptionUpdated
            | Self::SubscriptionDeleted
            | Self::InvoicePaid
            | Self::InvoicePaymentFailed => true,
            Self::Unknown(_) => false,
        }
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
