//! Flags

use super::{json, require_project_id, user};
use crate::api::{ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateFlag, Flag, FlagType, NewFlag, UpdateFlag};

/// Raise a flag as the connected user in the selected project
pub async fn create_flag(api: &ApiClient, flag: NewFlag) -> Result<(), ServiceError> {
    let author = user::get_connected_user(api).await?;
    let body = CreateFlag {
        description: flag.description,
        flag_type: flag.flag_type,
        first_student_id: flag.first_student_id,
        second_student_id: flag.second_student_id,
        author_id: author.id,
        project_id: require_project_id(api)?,
    };
    let request = MutateRequest::post("flags")
        .body(json(&body)?)
        .body_shape(Schema::<CreateFlag>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Approve the generated teams
pub async fn create_validation_flag(api: &ApiClient) -> Result<(), ServiceError> {
    create_flag(
        api,
        NewFlag {
            description: None,
            flag_type: FlagType::Validation,
            first_student_id: None,
            second_student_id: None,
        },
    )
    .await
}

/// Report a problem, about a pair of students when both are given
pub async fn create_reporting_flag(
    api: &ApiClient,
    description: &str,
    students: Option<(i64, i64)>,
) -> Result<(), ServiceError> {
    create_flag(
        api,
        NewFlag {
            description: Some(description.to_string()),
            flag_type: FlagType::Reporting,
            first_student_id: students.map(|(first, _)| first),
            second_student_id: students.map(|(_, second)| second),
        },
    )
    .await
}

/// Whether `author_id` already validated the teams
pub async fn user_has_validated_teams(api: &ApiClient, author_id: i64) -> Result<bool, ServiceError> {
    let flags = api
        .query_and_validate(QueryRequest::new(
            format!("flags/author/{author_id}/type/{}", FlagType::Validation.as_str()),
            Schema::<Vec<Flag>>::new(),
        ))
        .await
        .into_result()?;
    Ok(!flags.is_empty())
}

/// Flags of the selected project
pub async fn get_all_flags(api: &ApiClient) -> Result<Vec<Flag>, ServiceError> {
    api.query_and_validate(QueryRequest::new("flags", Schema::<Vec<Flag>>::new()))
        .await
        .into_result()
}

/// Patch a flag
pub async fn update_flag(api: &ApiClient, id: i64, body: &UpdateFlag) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("flags/{id}"))
        .body(json(body)?)
        .body_shape(Schema::<UpdateFlag>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Flags concerning members of a team
pub async fn get_flags_by_concerned_team(
    api: &ApiClient,
    team_id: i64,
) -> Result<Vec<Flag>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("flags/team/{team_id}"),
        Schema::<Vec<Flag>>::new(),
    ))
    .await
    .into_result()
}
