//! Users and permissions

use serde::{Deserialize, Serialize};

/// An account known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// E-mail address (login)
    pub email: String,
    /// Password hash, when exposed
    #[serde(default)]
    pub password: Option<String>,
    /// Private key, when exposed
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Request body for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Initial password
    #[serde(default)]
    pub password: Option<String>,
    /// Private key
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Request body for updating a user; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New private key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// A permission granted to a user
///
/// The permission vocabulary belongs to the backend, so values are kept as
/// opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(pub String);

impl Permission {
    /// Permission name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
