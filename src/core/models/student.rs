//! Students

use serde::{Deserialize, Serialize};

use super::{Project, Team};

/// Gender recorded for team balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Man
    Man,
    /// Woman
    Woman,
}

/// A student enrolled in a project (a user with team information)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// User ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Password hash, when exposed
    #[serde(default)]
    pub password: Option<String>,
    /// Private key, when exposed
    #[serde(default)]
    pub private_key: Option<String>,
    /// Gender, if known
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Whether the student holds a bachelor degree
    #[serde(default)]
    pub bachelor: Option<bool>,
    /// Role within the team
    #[serde(default)]
    pub team_role: Option<String>,
    /// Team, if assigned
    #[serde(default)]
    pub team: Option<Team>,
    /// Project the student belongs to
    pub project: Project,
}

/// Request body for creating a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
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
    /// Gender, if known
    pub gender: Option<Gender>,
    /// Whether the student holds a bachelor degree
    pub bachelor: bool,
    /// Role within the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_role: Option<String>,
    /// Team to join
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// Project the student belongs to
    pub project_id: i64,
}

/// Student fields supplied by the caller of `create_student`
///
/// Credentials and project are filled in by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    /// Display name
    pub name: String,
    /// Gender, if known
    pub gender: Option<Gender>,
    /// Whether the student holds a bachelor degree
    pub bachelor: bool,
    /// Role within the team
    #[serde(default)]
    pub team_role: Option<String>,
    /// Team to join
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// Request body for updating a student; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// New bachelor flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bachelor: Option<bool>,
    /// New team role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_role: Option<String>,
    /// New team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// New project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}
