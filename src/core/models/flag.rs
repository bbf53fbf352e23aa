//! Flags raised about team composition, and their validations

use serde::{Deserialize, Serialize};

use super::{Student, User};

/// Kind of flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    /// A problem report about two students
    Reporting,
    /// Approval of the generated teams
    Validation,
}

impl FlagType {
    /// Name used in routes
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reporting => "REPORTING",
            Self::Validation => "VALIDATION",
        }
    }
}

/// A flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    /// Flag ID
    pub id: i64,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Kind
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    /// First student concerned
    #[serde(default)]
    pub first_student: Option<Student>,
    /// Second student concerned
    #[serde(default)]
    pub second_student: Option<Student>,
    /// Author
    pub author: User,
    /// Resolution status
    #[serde(default)]
    pub status: Option<bool>,
}

/// Request body for creating a flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlag {
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    /// First student concerned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_student_id: Option<i64>,
    /// Second student concerned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_student_id: Option<i64>,
    /// Author
    pub author_id: i64,
    /// Project
    pub project_id: i64,
}

/// Fields supplied by the caller of `create_flag`
///
/// Author and project are filled in by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlag {
    /// Free-form description
    pub description: Option<String>,
    /// Kind
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    /// First student concerned
    pub first_student_id: Option<i64>,
    /// Second student concerned
    pub second_student_id: Option<i64>,
}

/// Request body for updating a flag; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlag {
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub flag_type: Option<FlagType>,
    /// New first student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_student_id: Option<i64>,
    /// New second student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_student_id: Option<i64>,
    /// New resolution status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// A staff member's answer to a validation flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFlag {
    /// Answering staff member
    pub author: User,
    /// Flag being answered
    pub flag: Flag,
    /// Answer, if given
    #[serde(default)]
    pub confirmed: Option<bool>,
}

/// Request body for answering a validation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateValidationFlag {
    /// Answer
    pub confirmed: Option<bool>,
    /// Answering staff member
    pub author_id: i64,
    /// Flag being answered
    pub flag_id: i64,
}
