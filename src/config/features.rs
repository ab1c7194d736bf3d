//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Load the demo catalog at startup and on reset
    #[serde(default = "default_seed_data")]
    pub seed_data: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_data: default_seed_data(),
        }
    }
}

fn default_seed_data() -> bool {
    true
}
