//! Roles

use serde::{Deserialize, Serialize};

use super::User;

/// Role a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    /// Supervising teacher of a team
    SupervisingStaff,
    /// Leader of the option
    OptionLeader,
    /// Leader of the project
    ProjectLeader,
    /// Student of the option
    OptionStudent,
    /// Member of a team
    TeamMember,
    /// System administrator
    SystemAdministrator,
    /// Technical coach
    TechnicalCoach,
}

impl RoleType {
    /// Every role
    pub const ALL: [Self; 7] = [
        Self::SupervisingStaff,
        Self::OptionLeader,
        Self::ProjectLeader,
        Self::OptionStudent,
        Self::TeamMember,
        Self::SystemAdministrator,
        Self::TechnicalCoach,
    ];

    /// Name used on the wire and in routes
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SupervisingStaff => "SUPERVISING_STAFF",
            Self::OptionLeader => "OPTION_LEADER",
            Self::ProjectLeader => "PROJECT_LEADER",
            Self::OptionStudent => "OPTION_STUDENT",
            Self::TeamMember => "TEAM_MEMBER",
            Self::SystemAdministrator => "SYSTEM_ADMINISTRATOR",
            Self::TechnicalCoach => "TECHNICAL_COACH",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| format!("Unknown role: {s}"))
    }
}

/// A role assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Assignment ID
    pub id: i64,
    /// Role held
    #[serde(rename = "type")]
    pub role_type: RoleType,
    /// Holder
    pub user: User,
}
