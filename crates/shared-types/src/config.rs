use crate::error::AppError;
use crate::feature_flags::FeatureFlags;
use serde::{Deserialize, Serialize};

/// Branding shown in the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_name() -> String {
    "CostIntel".to_string()
}

fn default_tagline() -> String {
    "Your comprehensive cost intelligence platform".to_string()
}

/// An account preloaded into the in-memory session provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Raw role tags, as the identity provider would report them.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub demo_accounts: Vec<DemoAccount>,
}

impl AppConfig {
    /// Parse a TOML document. Every section is optional.
    pub fn parse(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents)
            .map_err(|e| AppError::bad_request(format!("Invalid config.toml: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app.name, "CostIntel");
        assert!(config.demo_accounts.is_empty());
    }

    #[test]
    fn partial_app_section_keeps_other_defaults() {
        let config = AppConfig::parse(
            r#"
            [app]
            tagline = "Spend less"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.name, "CostIntel");
        assert_eq!(config.app.tagline, "Spend less");
        assert!(config.features.signup);
    }

    #[test]
    fn demo_accounts_parse_with_roles() {
        let config = AppConfig::parse(
            r#"
            [features]
            signup = false

            [[demo_accounts]]
            email = "admin@costintel.dev"
            password = "admin-pass"
            first_name = "Ada"
            roles = ["admin", "auditor"]

            [[demo_accounts]]
            email = "guest@costintel.dev"
            password = "guest-pass"
            "#,
        )
        .unwrap();
        assert!(!config.features.signup);
        assert_eq!(config.demo_accounts.len(), 2);
        assert_eq!(config.demo_accounts[0].roles, vec!["admin", "auditor"]);
        assert_eq!(config.demo_accounts[0].last_name, "");
        assert!(config.demo_accounts[1].roles.is_empty());
    }

    #[test]
    fn malformed_toml_is_bad_request() {
        let err = AppConfig::parse("[app\nname = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.starts_with("Invalid config.toml"));
    }

    #[test]
    fn account_missing_password_is_rejected() {
        let err = AppConfig::parse(
            r#"
            [[demo_accounts]]
            email = "nopass@costintel.dev"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }
}
