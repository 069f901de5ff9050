use serde::{Deserialize, Serialize};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Feature flags controlling development-only behavior.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// leaves the console in its production posture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Render guarded routes without a session and start as a development user.
    #[serde(default)]
    pub bypass_auth: bool,
    /// Accept the built-in credential pairs instead of calling the backend.
    #[serde(default)]
    pub mock_login: bool,
}

/// Build environment the console runs in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name, defaulting to production for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Optional keys stay `None` so later sources can tell "unset" from
/// "set to the default".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub features: FeatureFlags,
}
