//! Bonuses and penalties

use serde::{Deserialize, Serialize};

use super::coerce;
use super::{Sprint, Student, User};

/// A bonus (positive) or penalty (negative) for a student in a sprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    /// Bonus ID
    pub id: i64,
    /// Amount
    #[serde(deserialize_with = "coerce::number")]
    pub value: f64,
    /// Comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the bonus counts against the limited pool
    pub limited: bool,
    /// Sprint
    pub sprint: Sprint,
    /// Student
    pub student: Student,
    /// Author
    #[serde(default)]
    pub author: Option<User>,
}

/// Request body for creating a bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBonus {
    /// Amount
    pub value: f64,
    /// Comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the bonus counts against the limited pool
    pub limited: bool,
    /// Sprint
    pub sprint_id: i64,
    /// Student
    pub student_id: i64,
    /// Author
    #[serde(default)]
    pub author_id: Option<i64>,
}

/// Request body for updating a bonus; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBonus {
    /// New amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// New comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// New limited flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited: Option<bool>,
    /// New sprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<i64>,
    /// New student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    /// New author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
}
