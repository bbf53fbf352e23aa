//! Grades, averages and totals

use log::{debug, warn};

use super::{grade_type, json, notification, user};
use crate::api::{
    AnyShape, ApiClient, ArrayOf, MutateRequest, Nullable, Number, QueryRequest, Schema,
    ServiceError, Text,
};
use crate::core::models::{
    CreateGrade, Grade, GradeInput, GradeMap, GradeMatrix, IdentifyGrade, NotificationType,
    UpdateGrade,
};

/// Grades authored by the connected user
pub async fn get_all_rated_grades_from_connected_user(
    api: &ApiClient,
) -> Result<Vec<Grade>, ServiceError> {
    let user = user::get_connected_user(api).await?;
    api.query_and_validate(QueryRequest::new(
        format!("users/{}/rated-grades", user.id),
        Schema::<Vec<Grade>>::new(),
    ))
    .await
    .into_result()
}

/// Grade matching criterion, sprint and graded student or team
#[must_use]
pub fn find_rated_grade<'a>(grades: &'a [Grade], identity: &IdentifyGrade) -> Option<&'a Grade> {
    grades.iter().find(|grade| {
        grade.grade_type.name == identity.grade_type_name.as_str()
            && grade.sprint.as_ref().map(|s| s.id) == identity.sprint_id
            && (grade
                .student
                .as_ref()
                .is_some_and(|s| Some(s.id) == identity.student_id)
                || grade
                    .team
                    .as_ref()
                    .is_some_and(|t| Some(t.id) == identity.team_id))
    })
}

/// Create a grade authored by the connected user
pub async fn create_grade(api: &ApiClient, input: &GradeInput) -> Result<(), ServiceError> {
    let author = user::get_connected_user(api).await?;
    let grade_type = grade_type::get_grade_type_by_name(api, input.grade_type_name.as_str()).await?;
    let body = CreateGrade {
        value: input.value,
        comment: input.comment.clone(),
        grade_type_id: grade_type.id,
        author_id: author.id,
        student_id: input.student_id,
        team_id: input.team_id,
        sprint_id: input.sprint_id,
    };
    let request = MutateRequest::post("grades")
        .body(json(&body)?)
        .body_shape(Schema::<CreateGrade>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Patch a grade
pub async fn update_grade(api: &ApiClient, id: i64, body: &UpdateGrade) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("grades/{id}"))
        .body(json(body)?)
        .body_shape(Schema::<UpdateGrade>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Update the connected user's grade for this criterion, or create it
///
/// The graded student (individual criteria) or team is notified in the
/// background once the write succeeds; notification failures are logged.
pub async fn create_or_update_grade(api: &ApiClient, input: &GradeInput) -> Result<(), ServiceError> {
    let grades = get_all_rated_grades_from_connected_user(api).await?;
    let verb = match find_rated_grade(&grades, &input.identity()) {
        Some(existing) => {
            update_grade(api, existing.id, &input.to_update()).await?;
            "modifiée"
        },
        None => {
            create_grade(api, input).await?;
            "évaluée"
        },
    };
    notify_graded(api, input, verb);
    Ok(())
}

fn notify_graded(api: &ApiClient, input: &GradeInput, verb: &str) {
    let message = format!(
        "La note de \"{}\" du sprint {} a été {verb}.",
        input.grade_type_name,
        input.sprint_id.map(|id| id.to_string()).unwrap_or_default()
    );
    let kind = NotificationType::CreateGrade.as_str();
    let api = api.clone();
    let individual = input.grade_type_name.is_individual();
    let (student_id, team_id) = (input.student_id, input.team_id);

    tokio::spawn(async move {
        let sent = match (individual, student_id, team_id) {
            (true, Some(student), _) => {
                notification::send_notifications_by_users(&api, &message, &[student], kind).await
            },
            (false, _, Some(team)) => {
                notification::send_notifications_by_team(&api, &message, team, kind, false).await
            },
            _ => {
                debug!("No recipient for grade notification: {message}");
                Ok(())
            },
        };
        if let Err(e) = sent {
            warn!("Failed to send grade notification: {e}");
        }
    });
}

/// Imported grades
pub async fn get_all_imported_grades(api: &ApiClient) -> Result<Vec<Grade>, ServiceError> {
    api.query_and_validate(QueryRequest::new("grades/imported", Schema::<Vec<Grade>>::new()))
        .await
        .into_result()
}

/// Grades given through the application
pub async fn get_all_unimported_grades(api: &ApiClient) -> Result<Vec<Grade>, ServiceError> {
    api.query_and_validate(QueryRequest::new("grades/unimported", Schema::<Vec<Grade>>::new()))
        .await
        .into_result()
}

/// Averages by grade type and role for a user
pub async fn get_average_grades(api: &ApiClient, user_id: i64) -> Result<GradeMatrix, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("grades/average-grades-by-grade-type-by-role/{user_id}"),
        Schema::<GradeMatrix>::new(),
    ))
    .await
    .into_result()
}

/// Average of one grade type for a student or team in a sprint
pub async fn get_average_by_grade_type(
    api: &ApiClient,
    id: i64,
    sprint_id: i64,
    grade_type_name: &str,
) -> Result<f64, ServiceError> {
    let request = QueryRequest::new(format!("grades/average/{id}"), Number)
        .param("sprintId", sprint_id)
        .param("gradeTypeName", grade_type_name);
    api.query_and_validate(request).await.into_result()
}

/// Team averages by criterion for a sprint
pub async fn get_team_average(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<GradeMap, ServiceError> {
    let request = QueryRequest::new(format!("grades/average-team/{team_id}"), Schema::<GradeMap>::new())
        .param("sprintId", sprint_id);
    api.query_and_validate(request).await.into_result()
}

/// Student averages within a team for a sprint
pub async fn get_students_average_by_team(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<GradeMap, ServiceError> {
    let request = QueryRequest::new(
        format!("grades/average-students/{team_id}"),
        Schema::<GradeMap>::new(),
    )
    .param("sprintId", sprint_id);
    api.query_and_validate(request).await.into_result()
}

/// Total team mark for a sprint
pub async fn get_team_total_grade(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<f64, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/{team_id}/sprint/{sprint_id}/total"),
        Number,
    ))
    .await
    .into_result()
}

/// Total individual mark of a student for a sprint
pub async fn get_individual_total_grade(
    api: &ApiClient,
    student_id: i64,
    sprint_id: i64,
) -> Result<f64, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("students/{student_id}/sprint/{sprint_id}/total"),
        Number,
    ))
    .await
    .into_result()
}

/// Final sprint mark of a student
pub async fn get_sprint_grade(
    api: &ApiClient,
    student_id: i64,
    sprint_id: i64,
) -> Result<f64, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("students/{student_id}/sprint/{sprint_id}/grade"),
        Number,
    ))
    .await
    .into_result()
}

/// Individual totals of the members of a team for a sprint
pub async fn get_individual_total_grades(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<Vec<f64>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/{team_id}/sprint/{sprint_id}/individual/totals"),
        ArrayOf(Number),
    ))
    .await
    .into_result()
}

/// Sprint marks of the members of a team
pub async fn get_sprint_grades(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<Vec<f64>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/{team_id}/sprint/{sprint_id}/grades"),
        Schema::<Vec<f64>>::new(),
    ))
    .await
    .into_result()
}

/// Average sprint mark of each team
pub async fn get_average_sprint_grades(
    api: &ApiClient,
    sprint_id: i64,
) -> Result<Vec<f64>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("teams/sprint/{sprint_id}/average"),
        Schema::<Vec<f64>>::new(),
    ))
    .await
    .into_result()
}

/// Whether the grades of a team for a sprint are confirmed
pub async fn get_grades_confirmation(
    api: &ApiClient,
    sprint_id: i64,
    team_id: i64,
) -> Result<bool, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("grades/confirmation/{sprint_id}/team/{team_id}"),
        Schema::<bool>::new(),
    ))
    .await
    .into_result()
}

/// Confirm the grades of a team for a sprint
pub async fn set_grades_confirmation(
    api: &ApiClient,
    team_id: i64,
    sprint_id: i64,
) -> Result<(), ServiceError> {
    let request = MutateRequest::post(format!("grades/confirmation/{sprint_id}/team/{team_id}"))
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Every grade as CSV text
pub async fn download_grades_file(api: &ApiClient) -> Result<String, ServiceError> {
    api.query_and_validate(QueryRequest::new("grades/download", Text))
        .await
        .into_result()
}

/// Grade of a student by criterion, author and sprint; `None` on any failure
pub async fn get_grade_by_grade_type_and_author_and_sprint(
    api: &ApiClient,
    student_id: i64,
    grade_type_id: i64,
    author_id: i64,
    sprint_id: i64,
) -> Option<Grade> {
    let request = QueryRequest::new(
        format!("students/{student_id}/gradeType/{grade_type_id}/author/{author_id}"),
        Nullable(Schema::<Grade>::new()),
    )
    .param("sprintId", sprint_id);
    match api.query_and_validate(request).await.into_result() {
        Ok(grade) => grade,
        Err(e) => {
            debug!("No grade found: {e}");
            None
        },
    }
}

/// Individual grades of the members of a team for a sprint
pub async fn get_individual_grades_by_team(
    api: &ApiClient,
    sprint_id: i64,
    team_id: i64,
) -> Result<Vec<Grade>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("grades/individual-grades-by-team/{sprint_id}/{team_id}"),
        Schema::<Vec<Grade>>::new(),
    ))
    .await
    .into_result()
}
