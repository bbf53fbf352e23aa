//! Bonuses and penalties

use super::{json, user};
use crate::api::{AnyShape, ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{Bonus, CreateBonus, UpdateBonus};

/// Give a bonus; the connected user is the author
pub async fn create_bonus(api: &ApiClient, bonus: CreateBonus) -> Result<(), ServiceError> {
    let author = user::get_connected_user(api).await?;
    let body = CreateBonus {
        author_id: Some(author.id),
        ..bonus
    };
    let request = MutateRequest::post("bonuses")
        .body(json(&body)?)
        .body_shape(Schema::<CreateBonus>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Patch a bonus
pub async fn update_bonus(api: &ApiClient, id: i64, body: &UpdateBonus) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("bonuses/{id}"))
        .body(json(body)?)
        .body_shape(Schema::<UpdateBonus>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// The limited or unlimited bonus of a student for a sprint
pub async fn get_student_bonus(
    api: &ApiClient,
    student_id: i64,
    limited: bool,
    sprint_id: i64,
) -> Result<Bonus, ServiceError> {
    let request = QueryRequest::new(format!("students/{student_id}/bonus"), Schema::<Bonus>::new())
        .param("limited", limited)
        .param("sprintId", sprint_id);
    api.query_and_validate(request).await.into_result()
}

/// Every bonus of a student for a sprint
pub async fn get_student_bonuses(
    api: &ApiClient,
    student_id: i64,
    sprint_id: i64,
) -> Result<Vec<Bonus>, ServiceError> {
    let request = QueryRequest::new(
        format!("students/{student_id}/bonuses"),
        Schema::<Vec<Bonus>>::new(),
    )
    .param("sprintId", sprint_id);
    api.query_and_validate(request).await.into_result()
}

/// Bonuses of a team awaiting validation
pub async fn get_validation_bonuses_by_team(
    api: &ApiClient,
    team_id: i64,
) -> Result<Vec<Bonus>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("bonuses/teams/{team_id}"),
        Schema::<Vec<Bonus>>::new(),
    ))
    .await
    .into_result()
}

/// Record that `user_id` validated the bonuses of a team for a sprint
pub async fn set_validation_bonuses_by_team(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
    user_id: i64,
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("bonuses/teams/{team_id}/{sprint_id}/{user_id}"))
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}
