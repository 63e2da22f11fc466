use serde::{Deserialize, Serialize};

/// Feature flags controlling optional parts of the auth flow.
///
/// Loaded from the `[features]` table of `config.toml`. Missing fields take
/// the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Offer the sign-up form on the auth page.
    #[serde(default = "default_true")]
    pub signup: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { signup: true }
    }
}

fn default_true() -> bool {
    true
}
