//! Notifications between users

use serde::{Deserialize, Serialize};

use super::User;

/// Event that produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Teams were generated
    CreateTeams,
    /// A bonus or penalty was given
    BonusMalus,
    /// A student changed team
    MoveStudent,
    /// Students were deleted
    DeleteStudents,
    /// Students were imported
    ImportStudents,
    /// A grade was given or changed
    CreateGrade,
}

impl NotificationType {
    /// Name used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTeams => "CREATE_TEAMS",
            Self::BonusMalus => "BONUS_MALUS",
            Self::MoveStudent => "MOVE_STUDENT",
            Self::DeleteStudents => "DELETE_STUDENTS",
            Self::ImportStudents => "IMPORT_STUDENTS",
            Self::CreateGrade => "CREATE_GRADE",
        }
    }
}

/// A notification received by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification ID
    pub id: i64,
    /// Text
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the recipient has read it
    #[serde(default)]
    pub checked: Option<bool>,
    /// Originating event
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Recipient
    pub user_to: User,
    /// Sender
    pub user_from: User,
}

/// Request body for sending a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    /// Text
    #[serde(default)]
    pub message: Option<String>,
    /// Initial read flag
    #[serde(default)]
    pub checked: Option<bool>,
    /// Originating event
    #[serde(rename = "type", default)]
    pub notification_type: Option<String>,
    /// Recipient
    pub user_to_id: i64,
    /// Sender
    pub user_from_id: i64,
}

impl CreateNotification {
    /// Unread notification from `user_from_id` to `user_to_id`
    #[must_use]
    pub fn unread(message: &str, notification_type: &str, user_to_id: i64, user_from_id: i64) -> Self {
        Self {
            message: Some(message.to_string()),
            checked: Some(false),
            notification_type: Some(notification_type.to_string()),
            user_to_id,
            user_from_id,
        }
    }
}
