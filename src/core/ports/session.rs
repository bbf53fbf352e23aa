//! Session store port
//!
//! Holds what the browser client kept in cookies: bearer token, selected
//! project, connected user, role and permissions.

use thiserror::Error;

use super::super::models::{Permission, RoleType};

/// Errors raised when persisting session values
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session file could not be read or written
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file could not be parsed
    #[error("invalid session file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Session could not be serialized
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A structured value could not be encoded
    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Snapshot of the values the request pipeline reads at the start of a call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Bearer token, if logged in
    pub token: Option<String>,
    /// Currently selected project
    pub project_id: Option<i64>,
}

impl AuthContext {
    /// Value sent as the `projectId` query parameter (empty when unset)
    #[must_use]
    pub fn project_param(&self) -> String {
        self.project_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Key-value session storage
///
/// Getters never fail: a missing, expired or unreadable value reads as absent.
pub trait SessionStore: Send + Sync {
    /// Bearer token
    fn token(&self) -> Option<String>;

    /// Store the bearer token
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Selected project id
    fn project_id(&self) -> Option<i64>;

    /// Select a project
    fn set_project_id(&self, id: i64) -> Result<(), SessionError>;

    /// Connected user id
    fn user_id(&self) -> Option<i64>;

    /// Store the connected user id
    fn set_user_id(&self, id: i64) -> Result<(), SessionError>;

    /// Active role of the connected user
    fn role(&self) -> Option<RoleType>;

    /// Store the active role
    fn set_role(&self, role: RoleType) -> Result<(), SessionError>;

    /// Permissions of the connected user
    fn permissions(&self) -> Vec<Permission>;

    /// Store the permissions
    fn set_permissions(&self, permissions: &[Permission]) -> Result<(), SessionError>;

    /// Forget every session value
    fn remove_all(&self) -> Result<(), SessionError>;

    /// Read token and project id together
    fn auth_context(&self) -> AuthContext {
        AuthContext {
            token: self.token(),
            project_id: self.project_id(),
        }
    }
}
