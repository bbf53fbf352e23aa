//! Error types of the request pipeline and the services built on it

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ports::SessionError;

/// Client misconfiguration, surfaced when the client is built
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No base URL configured
    #[error("API URL is not set")]
    MissingApiUrl,

    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::ClientConfig`]
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// A value did not match the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create an error with a free-form message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create an error about a specific field
    #[must_use]
    pub fn at(field: &str, message: impl AsRef<str>) -> Self {
        Self {
            message: format!("{field}: {}", message.as_ref()),
        }
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Failure reported by a domain service
///
/// Displays as the bare message so pipeline messages such as
/// `Failed to fetch GET teams: 500 Internal Server Error` reach the user
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create an error
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ServiceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<SessionError> for ServiceError {
    fn from(err: SessionError) -> Self {
        Self::new(err.to_string())
    }
}
