//! Authorization engine configuration.

use serde::{Deserialize, Serialize};

/// Settings for the authorization and subscription gating engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Path to a TOML file overriding the built-in capability
    /// vocabulary. `None` uses the platform defaults.
    #[serde(default)]
    pub vocabulary_file: Option<String>,
    /// Whether quota checks go through the atomic usage ledger instead
    /// of the best-effort read-then-act check.
    #[serde(default)]
    pub strict_quota: bool,
    /// Trial length applied when a trial tariff does not specify one.
    #[serde(default = "default_trial_days")]
    pub default_trial_days: u32,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            vocabulary_file: None,
            strict_quota: false,
            default_trial_days: default_trial_days(),
        }
    }
}

fn default_trial_days() -> u32 {
    10
}
