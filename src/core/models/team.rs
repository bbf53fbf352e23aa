//! Teams, composition criteria and presentation order

use serde::{Deserialize, Serialize};

use super::coerce;
use super::{Project, Sprint, Student, User};

/// A team of students within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID
    pub id: i64,
    /// Team name
    pub name: String,
    /// Owning project
    pub project: Project,
    /// Team leader (supervising staff), if assigned
    #[serde(default)]
    pub leader: Option<User>,
}

/// Request body for creating a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    /// Team name
    pub name: String,
    /// Owning project
    pub project_id: i64,
    /// Leader user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
}

/// Request body for updating a team; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// New leader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
}

/// Body of the team generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTeams {
    /// Number of teams to create
    pub nb_teams: String,
    /// Minimum number of women per team
    pub nb_women: String,
}

/// Whether a team satisfies the composition criteria
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Number of women in the team
    #[serde(deserialize_with = "coerce::number")]
    pub nb_womens: f64,
    /// Number of bachelor students in the team
    #[serde(deserialize_with = "coerce::number")]
    pub nb_bachelors: f64,
    /// Women criterion satisfied
    pub valid_criteria_woman: bool,
    /// Bachelor criterion satisfied
    pub valid_criteria_bachelor: bool,
}

/// Position of a student in a sprint presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationOrder {
    /// Sprint the order applies to
    pub sprint: Sprint,
    /// Presenting student
    pub student: Student,
    /// Position (ascending)
    pub value: f64,
}
