use crate::constants::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECONDS, TIKWM_HOST};
use crate::error::Result;
use serde::Deserialize;
use std::fs;

/// Immutable runtime configuration, built once at startup and passed into
/// the client and server constructors.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub tikwm: TikwmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TikwmConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    tikwm: Option<TikwmConfig>,
}

fn default_host() -> String {
    TIKWM_HOST.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for TikwmConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the optional `config.toml` and the
    /// environment. A missing config file falls back to defaults; a present
    /// but invalid one is an error.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        let tikwm = match fs::read_to_string(config_path) {
            Ok(content) => {
                let file: ConfigFile = toml::from_str(&content)?;
                file.tikwm.unwrap_or_default()
            }
            Err(_) => TikwmConfig::default(),
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Config { port, tikwm })
    }
}
