//! Sprints

use chrono::NaiveDate;

use super::json;
use crate::api::{AnyShape, ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateSprint, Sprint, UpdateSprint};

/// Sprints of the selected project, ascending by `sprintOrder`
pub async fn get_sprints(api: &ApiClient) -> Result<Vec<Sprint>, ServiceError> {
    let mut sprints = api
        .query_and_validate(QueryRequest::new("sprints", Schema::<Vec<Sprint>>::new()))
        .await
        .into_result()?;
    sprints.sort_by_key(|s| s.sprint_order);
    Ok(sprints)
}

/// Sprints that receive grades (normal and final)
pub async fn get_graded_sprints(api: &ApiClient) -> Result<Vec<Sprint>, ServiceError> {
    let mut sprints = get_sprints(api).await?;
    sprints.retain(|s| s.end_type.is_graded());
    Ok(sprints)
}

/// Create a sprint
pub async fn add_sprint(api: &ApiClient, sprint: &CreateSprint) -> Result<(), ServiceError> {
    let request = MutateRequest::post("sprints")
        .body(json(sprint)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Patch a sprint
pub async fn update_sprint(
    api: &ApiClient,
    sprint_id: i64,
    sprint: &UpdateSprint,
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("sprints/{sprint_id}"))
        .body(json(sprint)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Delete a sprint
pub async fn delete_sprint(api: &ApiClient, sprint_id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete(format!("sprints/{sprint_id}")))
        .await
        .into_result()
}

/// Sprint running on `today` (whole days, both ends inclusive)
#[must_use]
pub fn current_sprint(sprints: &[Sprint], today: NaiveDate) -> Option<&Sprint> {
    sprints.iter().find(|s| s.contains(today))
}
