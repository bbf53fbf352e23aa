//! Comments and feedback

use super::{json, require_user_id};
use crate::api::{ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateFeedback, Feedback, UpdateFeedback};

/// Post a comment
pub async fn add_comment(api: &ApiClient, feedback: &CreateFeedback) -> Result<(), ServiceError> {
    let request = MutateRequest::post("comments")
        .body(json(feedback)?)
        .body_shape(Schema::<CreateFeedback>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Patch a comment
pub async fn update_comment(
    api: &ApiClient,
    id: i64,
    feedback: &UpdateFeedback,
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("comments/{id}"))
        .body(json(feedback)?)
        .body_shape(Schema::<UpdateFeedback>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Post a comment authored by the connected user
pub async fn create_comment(
    api: &ApiClient,
    team_id: Option<i64>,
    student_id: Option<i64>,
    content: &str,
    sprint_id: i64,
    feedback: bool,
) -> Result<(), ServiceError> {
    let comment = CreateFeedback {
        content: content.to_string(),
        feedback,
        author_id: require_user_id(api)?,
        team_id,
        student_id,
        sprint_id,
    };
    add_comment(api, &comment).await
}

type FeedbackQuery = QueryRequest<Schema<Vec<Feedback>>>;

async fn get_feedbacks(api: &ApiClient, request: FeedbackQuery) -> Result<Vec<Feedback>, ServiceError> {
    api.query_and_validate(request).await.into_result()
}

fn feedbacks(route: String) -> FeedbackQuery {
    QueryRequest::new(route, Schema::new())
}

/// Comments on a team for a sprint
pub async fn get_comments_by_sprint_and_team(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<Vec<Feedback>, ServiceError> {
    get_feedbacks(api, feedbacks(format!("teams/{team_id}/sprints/{sprint_id}/feedbacks"))).await
}

/// Comments on a student for a sprint
pub async fn get_comments_by_sprint_and_student(
    api: &ApiClient,
    student_id: i64,
    sprint_id: i64,
) -> Result<Vec<Feedback>, ServiceError> {
    get_feedbacks(
        api,
        feedbacks(format!("students/{student_id}/sprints/{sprint_id}/feedbacks")),
    )
    .await
}

/// Comments the connected user wrote about the students of a team
pub async fn get_team_students_comments_by_sprint_and_author(
    api: &ApiClient,
    sprint_id: i64,
    team_id: i64,
) -> Result<Vec<Feedback>, ServiceError> {
    let author_id = require_user_id(api)?;
    let request = feedbacks(format!(
        "sprints/{sprint_id}/author/{author_id}/student-comments"
    ))
    .param("teamId", team_id);
    get_feedbacks(api, request).await
}

/// Comments the connected user wrote about a team
pub async fn get_comments_by_team_and_sprint_and_author(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<Vec<Feedback>, ServiceError> {
    let author_id = require_user_id(api)?;
    get_feedbacks(
        api,
        feedbacks(format!(
            "teams/{team_id}/sprints/{sprint_id}/author/{author_id}/feedbacks"
        )),
    )
    .await
}

/// Individual comments on the members of a team for a sprint
pub async fn get_individual_comments_by_sprint_and_team(
    api: &ApiClient,
    sprint_id: i64,
    team_id: i64,
) -> Result<Vec<Feedback>, ServiceError> {
    get_feedbacks(
        api,
        feedbacks(format!("teams/{team_id}/sprints/{sprint_id}/individual-comments")),
    )
    .await
}
