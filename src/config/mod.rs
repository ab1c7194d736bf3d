//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PADDLE_MOCK` prefix and nested values are separated by double underscores.
//! Every value has a default, so an empty environment is a working setup.
//!
//! # Example
//!
//! ```no_run
//! use paddle_mock::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.bind_address());
//! ```

mod auth;
mod error;
mod features;
mod server;
mod webhook;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{LogFormat, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// API key authentication for `/v1/` routes
    #[serde(default)]
    pub auth: AuthConfig,

    /// Webhook signing and delivery
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PADDLE_MOCK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PADDLE_MOCK__SERVER__PORT=8081` -> `server.port = 8081`
    /// - `PADDLE_MOCK__WEBHOOK__DEFAULT_URL=...` -> `webhook.default_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PADDLE_MOCK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.webhook.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "PADDLE_MOCK__SERVER__PORT",
        "PADDLE_MOCK__SERVER__LOG_FORMAT",
        "PADDLE_MOCK__AUTH__ENABLED",
        "PADDLE_MOCK__AUTH__API_KEY",
        "PADDLE_MOCK__WEBHOOK__DEFAULT_URL",
        "PADDLE_MOCK__FEATURES__SEED_DATA",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(config.auth.enabled);
        assert!(config.features.seed_data);
        assert!(config.webhook.default_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PADDLE_MOCK__SERVER__PORT", "9000");
        env::set_var("PADDLE_MOCK__SERVER__LOG_FORMAT", "json");
        env::set_var("PADDLE_MOCK__AUTH__API_KEY", "custom_key");
        env::set_var("PADDLE_MOCK__WEBHOOK__DEFAULT_URL", "http://localhost:4000/hooks");
        env::set_var("PADDLE_MOCK__FEATURES__SEED_DATA", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.auth.api_key.expose_secret(), "custom_key");
        assert_eq!(
            config.webhook.default_destination(),
            Some("http://localhost:4000/hooks")
        );
        assert!(!config.features.seed_data);
    }

    #[test]
    fn test_validate_rejects_empty_key_with_auth_on() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PADDLE_MOCK__AUTH__API_KEY", "");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_auth_can_be_disabled() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PADDLE_MOCK__AUTH__ENABLED", "false");
        env::set_var("PADDLE_MOCK__AUTH__API_KEY", "");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.auth.enabled);
        assert!(config.validate().is_ok());
    }
}
