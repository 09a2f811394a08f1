//! Payment provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Inbound webhook configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe webhook signing secret
    #[serde(default)]
    pub stripe_webhook_secret: String,

    /// Maximum accepted age of a signed webhook, in seconds. Zero disables the check.
    #[serde(default = "default_webhook_tolerance")]
    pub webhook_tolerance_secs: u64,

    /// Reject events that were not sent in live mode
    #[serde(default)]
    pub require_livemode: bool,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }
        if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }
        if self.webhook_tolerance_secs > 3600 {
            return Err(ValidationError::InvalidWebhookTolerance);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_webhook_secret: String::new(),
            webhook_tolerance_secs: default_webhook_tolerance(),
            require_livemode: false,
        }
    }
}

fn default_webhook_tolerance() -> u64 {
    300
}
