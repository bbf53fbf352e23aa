//! Uniform success/error envelope returned by the request pipeline

use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/// Outcome of a pipeline call: validated data or a human-readable message
///
/// Serializes as `{"status":"success","data":...}` or
/// `{"status":"error","error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResult<T> {
    /// Call succeeded
    Success {
        /// Validated payload
        data: T,
    },
    /// Call failed
    Error {
        /// Failure message
        error: String,
    },
}

impl<T> ApiResult<T> {
    /// Wrap successful data
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Wrap a failure message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Whether the call succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Data, when successful
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Failure message, when failed
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error } => Some(error),
        }
    }

    /// Convert into a `Result`, carrying the message verbatim
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { error } => Err(ServiceError::from(error)),
        }
    }

    /// Transform the success payload
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success { data } => ApiResult::Success { data: f(data) },
            Self::Error { error } => ApiResult::Error { error },
        }
    }
}
