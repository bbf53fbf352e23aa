//! Projects

use super::{json, require_project_id};
use crate::api::{ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateProject, Project, ProjectPhase, UpdateProject};

/// The project selected in the session
pub async fn get_current_project(api: &ApiClient) -> Result<Project, ServiceError> {
    let id = require_project_id(api)?;
    api.query_and_validate(QueryRequest::new(format!("projects/{id}"), Schema::<Project>::new()))
        .await
        .into_result()
}

/// Phase of the selected project
pub async fn get_current_phase(api: &ApiClient) -> Result<ProjectPhase, ServiceError> {
    Ok(get_current_project(api).await?.phase)
}

/// Patch the selected project
pub async fn update_project(api: &ApiClient, body: &UpdateProject) -> Result<(), ServiceError> {
    let id = require_project_id(api)?;
    let request = MutateRequest::patch(format!("projects/{id}"))
        .body(json(body)?)
        .body_shape(Schema::<UpdateProject>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Create a project
pub async fn create_project(api: &ApiClient, body: &CreateProject) -> Result<(), ServiceError> {
    let request = MutateRequest::post("projects")
        .body(json(body)?)
        .body_shape(Schema::<CreateProject>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Make `id` the active project
pub async fn set_actual_project(api: &ApiClient, id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::post(format!("projects/actual/{id}")))
        .await
        .into_result()
}

/// Every project
pub async fn get_all_projects(api: &ApiClient) -> Result<Vec<Project>, ServiceError> {
    api.query_and_validate(QueryRequest::new("projects", Schema::<Vec<Project>>::new()))
        .await
        .into_result()
}

/// Delete a project
pub async fn delete_project(api: &ApiClient, id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete(format!("projects/{id}")))
        .await
        .into_result()
}
