use crate::error::{BridgeError, Result};
use serde::Deserialize;
use std::fs;

/// Environment variable consulted for the account password so it never has
/// to live in the config file.
pub const PASSWORD_ENV: &str = "REGISTRAR_PASSWORD";

fn default_language() -> String {
    "en".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URL of the registrar RPC endpoint.
    pub endpoint: String,
    /// Account identifier used by the login operation.
    pub account: String,
    /// Account password; overridden by REGISTRAR_PASSWORD when set.
    #[serde(default)]
    pub password: String,
    /// Preferred response language for remote faults ("en" or "fr").
    #[serde(default = "default_language")]
    pub language: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("registrar.toml")
    }

    pub fn load_from(config_path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            BridgeError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;

        let mut config: Config = toml::from_str(&config_content)?;

        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            config.password = password;
        }
        if config.password.is_empty() {
            return Err(BridgeError::Config(format!(
                "No account password: set {} or the 'password' key",
                PASSWORD_ENV
            )));
        }

        Ok(config)
    }
}
