//! Sprints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Project;
use super::coerce;

/// How a sprint ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintEndType {
    /// Graded review with presentation
    NormalSprint,
    /// Optional client review, not graded
    UngradedSprint,
    /// Graded review plus commercial presentation
    FinalSprint,
}

impl SprintEndType {
    /// Whether sprints of this kind receive grades
    #[must_use]
    pub const fn is_graded(self) -> bool {
        matches!(self, Self::NormalSprint | Self::FinalSprint)
    }
}

/// A sprint of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Sprint ID
    pub id: i64,
    /// First day
    #[serde(with = "coerce::date")]
    pub start_date: NaiveDate,
    /// Last day
    #[serde(with = "coerce::date")]
    pub end_date: NaiveDate,
    /// End type
    pub end_type: SprintEndType,
    /// Position within the project
    #[serde(deserialize_with = "coerce::integer")]
    pub sprint_order: i64,
    /// Owning project
    pub project: Project,
}

impl Sprint {
    /// Whether `day` falls within the sprint (both ends inclusive)
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Request body for creating a sprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprint {
    /// First day (`YYYY-MM-DD`)
    pub start_date: String,
    /// Last day (`YYYY-MM-DD`)
    pub end_date: String,
    /// End type
    pub end_type: SprintEndType,
    /// Position within the project
    pub sprint_order: i64,
    /// Owning project
    pub project_id: i64,
}

/// Request body for updating a sprint; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprint {
    /// New first day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// New last day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// New end type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_type: Option<SprintEndType>,
    /// New position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_order: Option<i64>,
    /// New project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}
