//! API authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Bearer API key required on `/v1/` routes
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Turn the check off entirely
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Expected bearer token
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_KEY"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: default_api_key(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_api_key() -> SecretString {
    SecretString::new("test_paddle_api_key".to_string())
}
