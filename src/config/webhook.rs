//! Webhook configuration

use serde::Deserialize;
use std::fmt;

use super::error::ValidationError;

/// Webhook configuration (billing provider signing)
#[derive(Clone, Deserialize)]
pub struct WebhookConfig {
    /// Webhook signing secret shared with the billing provider
    pub signing_secret: String,

    /// Path the webhook is mounted at
    #[serde(default = "default_path")]
    pub path: String,
}

impl WebhookConfig {
    /// Validate webhook configuration
    ///
    /// An empty signing secret is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.signing_secret.is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK_SIGNING_SECRET"));
        }
        if !self.path.starts_with('/') {
            return Err(ValidationError::InvalidWebhookPath);
        }
        Ok(())
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("signing_secret", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

fn default_path() -> String {
    crate::adapters::http::DEFAULT_WEBHOOK_PATH.to_string()
}
