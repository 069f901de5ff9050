use shared_types::{AppConfig, Environment, FeatureFlags, DEFAULT_API_URL};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Resolved console configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub environment: Environment,
    pub log_level: String,
    pub flags: FeatureFlags,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: if cfg!(debug_assertions) {
                Environment::Development
            } else {
                Environment::Production
            },
            log_level: "info".to_string(),
            flags: FeatureFlags::default(),
        }
    }
}

impl ClientConfig {
    /// Built-in credentials are only honoured in development builds.
    pub fn uses_mock_login(&self) -> bool {
        self.environment.is_development() && self.flags.mock_login
    }

    pub fn bypasses_auth(&self) -> bool {
        self.flags.bypass_auth
    }

    /// Layer the values present in a parsed `config.toml` over these.
    pub fn merge_file(mut self, file: AppConfig) -> Self {
        if let Some(url) = file.api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(env) = file.environment {
            self.environment = env;
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        self.flags.bypass_auth |= file.features.bypass_auth;
        self.flags.mock_login |= file.features.mock_login;
        self
    }

    /// Layer key/value overrides (environment variables) over these.
    pub fn merge_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("API_URL").filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(env) = lookup("APP_ENV") {
            self.environment = Environment::from_str_or_default(&env);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level.trim().to_lowercase();
        }
        if let Some(v) = lookup("AUTH_BYPASS") {
            self.flags.bypass_auth = parse_flag(&v);
        }
        if let Some(v) = lookup("USE_MOCK_LOGIN") {
            self.flags.mock_login = parse_flag(&v);
        }
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Resolve the configuration once and hand out the same instance afterwards.
///
/// Precedence, lowest first: built-in defaults, `config.toml`, `.env`, the
/// process environment. Web builds read the same keys at compile time.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(resolve)
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve() -> ClientConfig {
    let _ = dotenvy::dotenv();

    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(file) => ClientConfig::default().merge_file(file),
            Err(e) => {
                eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
                ClientConfig::default()
            }
        },
        Err(_) => ClientConfig::default(),
    };

    config.merge_lookup(|key| std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
fn resolve() -> ClientConfig {
    ClientConfig::default().merge_lookup(build_time_value)
}

#[cfg(target_arch = "wasm32")]
fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        "API_URL" => option_env!("API_URL"),
        "APP_ENV" => option_env!("APP_ENV"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        "AUTH_BYPASS" => option_env!("AUTH_BYPASS"),
        "USE_MOCK_LOGIN" => option_env!("USE_MOCK_LOGIN"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn production() -> ClientConfig {
        ClientConfig {
            environment: Environment::Production,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.log_level, "info");
        assert!(!config.bypasses_auth());
    }

    #[test]
    fn file_values_override_defaults() {
        let file: AppConfig = toml::from_str(
            r#"
            api_url = "https://api.hospital.example"
            environment = "development"

            [features]
            mock_login = true
            "#,
        )
        .unwrap();
        let config = production().merge_file(file);
        assert_eq!(config.api_url, "https://api.hospital.example");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.uses_mock_login());
        assert!(!config.flags.bypass_auth);
    }

    #[test]
    fn environment_wins_over_file() {
        let file = AppConfig {
            api_url: Some("https://from-file.example".to_string()),
            ..AppConfig::default()
        };
        let config = production().merge_file(file).merge_lookup(lookup(&[
            ("API_URL", "https://from-env.example"),
            ("AUTH_BYPASS", "true"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.api_url, "https://from-env.example");
        assert!(config.bypasses_auth());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn mock_login_needs_development() {
        let config = production().merge_lookup(lookup(&[("USE_MOCK_LOGIN", "1")]));
        assert!(config.flags.mock_login);
        assert!(!config.uses_mock_login());

        let config = config.merge_lookup(lookup(&[("APP_ENV", "development")]));
        assert!(config.uses_mock_login());
    }

    #[test]
    fn blank_api_url_is_ignored() {
        let config = production().merge_lookup(lookup(&[("API_URL", "  ")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn unrecognised_flag_values_are_off() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("enabled"));
        assert!(!parse_flag(""));
    }
}
