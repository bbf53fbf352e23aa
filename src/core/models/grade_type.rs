//! Grade types (evaluation criteria)

use serde::{Deserialize, Serialize};

use super::Project;
use super::coerce;

/// An evaluation criterion, imported from a spreadsheet or built in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeType {
    /// Grade type ID
    pub id: i64,
    /// Name (see [`GradeTypeName`] for the built-in ones)
    pub name: String,
    /// Weight in the final mark
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub factor: Option<f64>,
    /// Whether the grade applies to a whole team
    pub for_group: bool,
    /// Whether the grade type comes from an import
    pub imported: bool,
    /// Owning project
    pub project: Project,
    /// Grading scale text, if uploaded
    #[serde(rename = "scaleTXTBlob", default, skip_serializing_if = "Option::is_none")]
    pub scale_txt_blob: Option<String>,
}

/// Request body for updating a grade type; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGradeType {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// New team flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_group: Option<bool>,
    /// New imported flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<bool>,
    /// New grading scale
    #[serde(rename = "scaleTXTBlob", default, skip_serializing_if = "Option::is_none")]
    pub scale_txt_blob: Option<String>,
}

/// Built-in grade type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeTypeName {
    /// Technical solution
    #[serde(rename = "Solution Technique")]
    TechnicalSolution,
    /// Sprint conformity
    #[serde(rename = "Conformité au sprint")]
    SprintConformity,
    /// Project management
    #[serde(rename = "Gestion de projet")]
    ProjectManagement,
    /// Presentation content
    #[serde(rename = "Contenu de la présentation")]
    PresentationContent,
    /// Overall team performance
    #[serde(rename = "Performance globale de l'équipe")]
    TeamPerformance,
    /// Individual performance
    #[serde(rename = "Performance individuelle")]
    IndividualPerformance,
    /// Imported average
    #[serde(rename = "Moyenne")]
    Average,
}

impl GradeTypeName {
    /// Every built-in name
    pub const ALL: [Self; 7] = [
        Self::TechnicalSolution,
        Self::SprintConformity,
        Self::ProjectManagement,
        Self::PresentationContent,
        Self::TeamPerformance,
        Self::IndividualPerformance,
        Self::Average,
    ];

    /// Label used by the backend
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TechnicalSolution => "Solution Technique",
            Self::SprintConformity => "Conformité au sprint",
            Self::ProjectManagement => "Gestion de projet",
            Self::PresentationContent => "Contenu de la présentation",
            Self::TeamPerformance => "Performance globale de l'équipe",
            Self::IndividualPerformance => "Performance individuelle",
            Self::Average => "Moyenne",
        }
    }

    /// Whether grades of this type target a single student
    #[must_use]
    pub const fn is_individual(self) -> bool {
        matches!(self, Self::IndividualPerformance)
    }
}

impl std::fmt::Display for GradeTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GradeTypeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown grade type: {s}"))
    }
}
