//! Projects and their lifecycle phase

use serde::{Deserialize, Serialize};

use super::coerce;

/// Phase a project goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectPhase {
    /// Teams are being composed
    Composing,
    /// Teams are visible to staff only
    Prepublished,
    /// Teams are visible to everyone
    Published,
    /// Project is over
    Finished,
}

impl std::fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Composing => write!(f, "COMPOSING"),
            Self::Prepublished => write!(f, "PREPUBLISHED"),
            Self::Published => write!(f, "PUBLISHED"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}

/// A student project (one academic edition)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID
    pub id: i64,
    /// Project name
    pub name: String,
    /// Number of teams to generate
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub nb_teams: Option<f64>,
    /// Minimum number of women per team
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub nb_women: Option<f64>,
    /// Current phase
    pub phase: ProjectPhase,
    /// Whether this is the active project
    pub actual: bool,
}

/// Request body for creating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Project name
    pub name: String,
    /// Number of teams to generate
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub nb_teams: Option<f64>,
    /// Minimum number of women per team
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub nb_women: Option<f64>,
    /// Initial phase
    pub phase: ProjectPhase,
    /// Whether the project starts active
    pub actual: bool,
}

/// Request body for updating a project; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New team count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_teams: Option<f64>,
    /// New minimum number of women
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_women: Option<f64>,
    /// New phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<ProjectPhase>,
    /// New active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<bool>,
}
