//! User configuration for the taskdeck client.
//!
//! Settings live in `~/.taskdeck/config.toml`:
//!
//! ```toml
//! api_base_url = "http://localhost:8081/api"
//! timeout_secs = 15
//! ```
//!
//! The `TASKDECK_API_URL` environment variable overrides the file; a
//! missing or malformed file falls back to defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use taskdeck_api::DEFAULT_BASE_URL;

/// Environment variable that overrides the configured base URL.
pub const ENV_API_URL: &str = "TASKDECK_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Get the taskdeck config directory (~/.taskdeck)
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".taskdeck"))
        .ok_or(ConfigError::NoHomeDir)
}

/// Get the path to the config file (~/.taskdeck/config.toml)
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

impl AppConfig {
    /// Load the config file and apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        config
    }

    fn load_file() -> Option<Self> {
        let path = config_path().ok()?;
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed config file");
                None
            }
        }
    }

    /// Parse config from TOML text; missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8081/api");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_keys() {
        let config =
            AppConfig::from_toml("api_base_url = \"http://tasks.internal/api\"").unwrap();
        assert_eq!(config.api_base_url, "http://tasks.internal/api");
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn full_files_parse() {
        let config = AppConfig::from_toml(
            "api_base_url = \"http://tasks.internal/api\"\ntimeout_secs = 30\n",
        )
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml("api_base_url = [").is_err());
    }

    #[test]
    fn config_path_is_under_the_home_directory() {
        let path = config_path().expect("home directory available");
        assert!(path.ends_with(".taskdeck/config.toml"));
    }
}
