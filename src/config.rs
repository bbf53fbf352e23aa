//! Client configuration
//!
//! Stored at `~/.teamgrade/config.toml`:
//!
//! ```toml
//! api_url = "https://grading.example.org/api"
//! timeout_secs = 30
//! session_file = "/home/me/.teamgrade/session.toml"
//! ```
//!
//! `TEAMGRADE_API_URL` in the environment takes precedence over `api_url`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ConfigError;
use crate::paths;

/// Environment variable overriding the configured API URL
pub const API_URL_ENV: &str = "TEAMGRADE_API_URL";

/// Client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Per-request timeout of the HTTP transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Where the session is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load config from `path`, reporting why it could not be used
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// API URL, preferring `env` over the file; empty values count as unset
    pub fn resolved_api_url(&self, env: Option<String>) -> Result<String, ConfigError> {
        env.filter(|url| !url.is_empty())
            .or_else(|| self.api_url.clone().filter(|url| !url.is_empty()))
            .ok_or(ConfigError::MissingApiUrl)
    }

    /// API URL, honoring [`API_URL_ENV`]
    pub fn api_url(&self) -> Result<String, ConfigError> {
        self.resolved_api_url(std::env::var(API_URL_ENV).ok())
    }

    /// Transport timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Session file location
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(paths::session_file)
    }
}
