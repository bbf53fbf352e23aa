//! Teams

use super::json;
use crate::api::{
    AnyShape, ApiClient, MutateRequest, Number, OrEmpty, QueryRequest, Schema, ServiceError,
};
use crate::core::models::{Criteria, GenerateTeams, PresentationOrder, Student, Team, UpdateTeam};

/// Teams of the selected project
pub async fn get_teams(api: &ApiClient) -> Result<Vec<Team>, ServiceError> {
    api.query_and_validate(QueryRequest::new("teams", Schema::<Vec<Team>>::new()))
        .await
        .into_result()
}

/// One team
pub async fn get_team_by_id(api: &ApiClient, id: i64) -> Result<Team, ServiceError> {
    api.query_and_validate(QueryRequest::new(format!("teams/{id}"), Schema::<Team>::new()))
        .await
        .into_result()
}

/// Patch a team
pub async fn update_team(api: &ApiClient, id: i64, body: &UpdateTeam) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("teams/{id}"))
        .body(json(body)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Rename a team
pub async fn set_team_name(api: &ApiClient, id: i64, name: &str) -> Result<(), ServiceError> {
    let request = MutateRequest::put(format!("teams/update-name-team/{id}")).param("newName", name);
    api.mutate_and_validate(request).await.into_result()
}

/// Assign the leader of a team
pub async fn set_team_leader(api: &ApiClient, id: i64, leader_id: i64) -> Result<(), ServiceError> {
    let request =
        MutateRequest::put(format!("teams/update-leader-team/{id}")).param("idLeader", leader_id);
    api.mutate_and_validate(request).await.into_result()
}

/// Generate the teams of the selected project
pub async fn generate_teams(
    api: &ApiClient,
    nb_teams: &str,
    nb_women: &str,
    auto_women_ratio: bool,
) -> Result<(), ServiceError> {
    let body = GenerateTeams {
        nb_teams: nb_teams.to_string(),
        nb_women: nb_women.to_string(),
    };
    let request = MutateRequest::post("teams")
        .param("autoWomenRatio", auto_women_ratio)
        .body(json(&body)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Whether a team satisfies the composition criteria
pub async fn get_criteria(api: &ApiClient, team_id: i64) -> Result<Criteria, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/{team_id}/criteria"),
        Schema::<Criteria>::new(),
    ))
    .await
    .into_result()
}

/// Average mark of a team
pub async fn get_team_average(api: &ApiClient, team_id: i64) -> Result<f64, ServiceError> {
    api.query_and_validate(QueryRequest::new(format!("teams/{team_id}/average"), Number))
        .await
        .into_result()
}

/// Delete every team of the selected project
pub async fn delete_all_teams(api: &ApiClient) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete("teams"))
        .await
        .into_result()
}

/// Team of a user; the backend answers `""` when there is none
pub async fn get_team_by_user_id(api: &ApiClient, user_id: i64) -> Result<Option<Team>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("users/{user_id}/team"),
        OrEmpty(Schema::<Team>::new()),
    ))
    .await
    .into_result()
}

/// Team led by a staff member
pub async fn get_team_by_leader_id(api: &ApiClient, leader_id: i64) -> Result<Team, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/leader/{leader_id}"),
        Schema::<Team>::new(),
    ))
    .await
    .into_result()
}

/// Students of a team in presentation order for a sprint
pub async fn get_presentation_order(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<Vec<Student>, ServiceError> {
    let request = QueryRequest::new(
        format!("teams/{team_id}/presentation-order"),
        Schema::<Vec<PresentationOrder>>::new(),
    )
    .param("sprintId", sprint_id);
    let mut order = api.query_and_validate(request).await.into_result()?;
    order.sort_by(|a, b| a.value.total_cmp(&b.value));
    Ok(order.into_iter().map(|o| o.student).collect())
}

/// Store the presentation order of a team for a sprint
pub async fn update_presentation_order(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
    order: &[Student],
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("teams/{team_id}/presentation-order"))
        .param("sprintId", sprint_id)
        .body(json(order)?)
        .body_shape(Schema::<Vec<Student>>::new());
    api.mutate_and_validate(request).await.into_result()
}
