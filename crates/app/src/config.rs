use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time so the
/// web build needs no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config once. Safe to call repeatedly.
///
/// If the file is unparseable, every section falls back to its defaults
/// (no demo accounts, sign-up enabled).
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load(CONFIG_TOML))
}

fn load(contents: &str) -> AppConfig {
    match AppConfig::parse(contents) {
        Ok(config) => {
            tracing::info!(
                accounts = config.demo_accounts.len(),
                signup = config.features.signup,
                "Config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            AppConfig::default()
        }
    }
}
