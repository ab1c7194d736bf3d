//! Outbound webhook configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Webhook signing and delivery
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// HMAC key for `Paddle-Signature`
    #[serde(default = "default_signing_secret")]
    pub signing_secret: SecretString,

    /// Destination registered at startup and after every reset
    #[serde(default)]
    pub default_url: Option<String>,

    /// Per-delivery HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The default destination, ignoring an empty value.
    pub fn default_destination(&self) -> Option<&str> {
        self.default_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.signing_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK__SIGNING_SECRET"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = self.default_destination() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            signing_secret: default_signing_secret(),
            default_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_signing_secret() -> SecretString {
    SecretString::new("pdl_test_signing_secret".to_string())
}

fn default_timeout_secs() -> u64 {
    10
}
