//! Grades

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce;
use super::{GradeType, GradeTypeName, Sprint, Student, Team, User};

/// A grade given to a student or a team for a sprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    /// Grade ID
    pub id: i64,
    /// Mark, if given
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub value: Option<f64>,
    /// Comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Criterion
    pub grade_type: GradeType,
    /// Author
    #[serde(default)]
    pub author: Option<User>,
    /// Graded student (individual grades)
    #[serde(default)]
    pub student: Option<Student>,
    /// Graded team (team grades)
    #[serde(default)]
    pub team: Option<Team>,
    /// Sprint
    #[serde(default)]
    pub sprint: Option<Sprint>,
    /// Whether the grade was confirmed
    pub confirmed: bool,
}

/// Request body for creating a grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGrade {
    /// Mark
    #[serde(default)]
    pub value: Option<f64>,
    /// Comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Criterion
    pub grade_type_id: i64,
    /// Author
    pub author_id: i64,
    /// Graded student
    #[serde(default)]
    pub student_id: Option<i64>,
    /// Graded team
    #[serde(default)]
    pub team_id: Option<i64>,
    /// Sprint
    #[serde(default)]
    pub sprint_id: Option<i64>,
}

/// Request body for updating a grade; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGrade {
    /// New mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// New comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// New criterion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_type_id: Option<i64>,
    /// New author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// New student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    /// New team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// New sprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<i64>,
}

/// A mark as entered by the connected user, identified by criterion name
///
/// The service resolves the author and the grade type ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeInput {
    /// Criterion
    pub grade_type_name: GradeTypeName,
    /// Mark
    pub value: Option<f64>,
    /// Comment
    pub comment: Option<String>,
    /// Graded student
    pub student_id: Option<i64>,
    /// Graded team
    pub team_id: Option<i64>,
    /// Sprint
    pub sprint_id: Option<i64>,
}

impl GradeInput {
    /// Key used to look up an existing grade
    #[must_use]
    pub const fn identity(&self) -> IdentifyGrade {
        IdentifyGrade {
            grade_type_name: self.grade_type_name,
            student_id: self.student_id,
            team_id: self.team_id,
            sprint_id: self.sprint_id,
        }
    }

    /// Update body carrying the mark and comment
    #[must_use]
    pub fn to_update(&self) -> UpdateGrade {
        UpdateGrade {
            value: self.value,
            comment: self.comment.clone(),
            student_id: self.student_id,
            team_id: self.team_id,
            sprint_id: self.sprint_id,
            ..UpdateGrade::default()
        }
    }
}

/// Identifies a grade by criterion, sprint and graded student or team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyGrade {
    /// Criterion
    pub grade_type_name: GradeTypeName,
    /// Graded student
    pub student_id: Option<i64>,
    /// Graded team
    pub team_id: Option<i64>,
    /// Sprint
    pub sprint_id: Option<i64>,
}

/// Averages per grade type and role (rows of nullable marks)
pub type GradeMatrix = Vec<Vec<Option<f64>>>;

/// Averages keyed by student or criterion name
pub type GradeMap = BTreeMap<String, Option<f64>>;
