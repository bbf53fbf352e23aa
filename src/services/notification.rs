//! Notifications
//!
//! Fan-out sends one `POST notifications` per recipient, each on its own
//! task. All sends run to completion; the first failure in recipient order is
//! reported.

use futures::future::join_all;

use super::{json, require_user_id, student, team, user};
use crate::api::{ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateNotification, Notification, NotificationType, RoleType};

/// Every notification
pub async fn get_all_notifications(api: &ApiClient) -> Result<Vec<Notification>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        "notifications",
        Schema::<Vec<Notification>>::new(),
    ))
    .await
    .into_result()
}

/// Notifications received by a user
pub async fn get_all_notifications_from_user(
    api: &ApiClient,
    user_id: i64,
) -> Result<Vec<Notification>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("users/{user_id}/notifications"),
        Schema::<Vec<Notification>>::new(),
    ))
    .await
    .into_result()
}

/// Toggle the read flag of a notification
pub async fn change_state_checked(api: &ApiClient, id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::patch(format!(
        "notifications/{id}/changeStateChecked"
    )))
    .await
    .into_result()
}

async fn post(api: &ApiClient, notification: &CreateNotification) -> Result<(), ServiceError> {
    let request = MutateRequest::post("notifications")
        .body(json(notification)?)
        .body_shape(Schema::<CreateNotification>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Send one team-creation notification
pub async fn add_notification(
    api: &ApiClient,
    user_to_id: i64,
    user_from_id: i64,
    message: &str,
) -> Result<(), ServiceError> {
    let notification = CreateNotification::unread(
        message,
        NotificationType::CreateTeams.as_str(),
        user_to_id,
        user_from_id,
    );
    post(api, &notification).await
}

/// Notify every team member and supervising staff member that teams changed
pub async fn send_many_notifications(api: &ApiClient, message: &str) -> Result<(), ServiceError> {
    let mut recipients = user::get_users_by_role(api, RoleType::TeamMember).await?;
    recipients.extend(user::get_users_by_role(api, RoleType::SupervisingStaff).await?);
    let ids: Vec<i64> = recipients.iter().map(|u| u.id).collect();
    send_notifications_by_users(api, message, &ids, NotificationType::CreateTeams.as_str()).await
}

/// Notify every holder of any of `roles`
pub async fn send_notifications_by_role(
    api: &ApiClient,
    message: &str,
    roles: &[RoleType],
    notification_type: &str,
) -> Result<(), ServiceError> {
    let lookups = join_all(roles.iter().map(|role| user::get_users_by_role(api, *role))).await;
    let mut ids = Vec::new();
    for users in lookups {
        ids.extend(users?.into_iter().map(|u| u.id));
    }
    send_notifications_by_users(api, message, &ids, notification_type).await
}

/// Notify each user in `recipients`, concurrently
///
/// One task per recipient. Every send completes even when another fails.
pub async fn send_notifications_by_users(
    api: &ApiClient,
    message: &str,
    recipients: &[i64],
    notification_type: &str,
) -> Result<(), ServiceError> {
    let user_from_id = require_user_id(api)?;
    let tasks = recipients.iter().map(|&user_to_id| {
        let api = api.clone();
        let notification =
            CreateNotification::unread(message, notification_type, user_to_id, user_from_id);
        tokio::spawn(async move { post(&api, &notification).await })
    });

    for joined in join_all(tasks).await {
        joined.map_err(|e| ServiceError::new(format!("notification task failed: {e}")))??;
    }
    Ok(())
}

/// Notify the students of a team, and its leader when `include_leader` is set
pub async fn send_notifications_by_team(
    api: &ApiClient,
    message: &str,
    team_id: i64,
    notification_type: &str,
    include_leader: bool,
) -> Result<(), ServiceError> {
    let students = student::get_students_by_team_id(api, team_id, false).await?;
    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let team = team::get_team_by_id(api, team_id).await?;
    if include_leader && let Some(leader) = &team.leader {
        send_notifications_by_users(api, message, &[leader.id], notification_type).await?;
    }
    send_notifications_by_users(api, message, &student_ids, notification_type).await
}
