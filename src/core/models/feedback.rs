//! Comments and feedback on sprints

use serde::{Deserialize, Serialize};

use super::{Sprint, Student, Team, User};

/// A comment (or feedback, when `feedback` is set) on a team or student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Comment ID
    pub id: i64,
    /// Text
    pub content: String,
    /// Whether this is feedback addressed to the team rather than a private comment
    pub feedback: bool,
    /// Team concerned
    #[serde(default)]
    pub team: Option<Team>,
    /// Student concerned
    #[serde(default)]
    pub student: Option<Student>,
    /// Sprint
    pub sprint: Sprint,
    /// Author
    pub author: User,
}

/// Request body for creating a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedback {
    /// Text
    pub content: String,
    /// Feedback flag
    pub feedback: bool,
    /// Author
    pub author_id: i64,
    /// Team concerned
    pub team_id: Option<i64>,
    /// Student concerned
    pub student_id: Option<i64>,
    /// Sprint
    pub sprint_id: i64,
}

/// Request body for updating a comment; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedback {
    /// New text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New feedback flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<bool>,
    /// New author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// New team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// New student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    /// New sprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<i64>,
}
