//! Students

use super::{json, require_project_id};
use crate::api::{
    AnyShape, ApiClient, FormShape, MutateRequest, Payload, QueryRequest, Schema, ServiceError,
    Text,
};
use crate::core::models::{CreateStudent, NewStudent, Student, UpdateStudent};
use crate::core::ports::MultipartForm;

/// Form part carrying the student CSV
pub const STUDENT_UPLOAD_PART: &str = "file-upload";

/// Students of the selected project
pub async fn get_all_students(api: &ApiClient) -> Result<Vec<Student>, ServiceError> {
    api.query_and_validate(QueryRequest::new("students", Schema::<Vec<Student>>::new()))
        .await
        .into_result()
}

/// One student
pub async fn get_student_by_id(api: &ApiClient, id: i64) -> Result<Student, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("students/{id}"),
        Schema::<Student>::new(),
    ))
    .await
    .into_result()
}

/// Members of a team, optionally in presentation order
pub async fn get_students_by_team_id(
    api: &ApiClient,
    team_id: i64,
    ordered: bool,
) -> Result<Vec<Student>, ServiceError> {
    let request = QueryRequest::new(
        format!("teams/{team_id}/students"),
        Schema::<Vec<Student>>::new(),
    )
    .param("ordered", ordered);
    api.query_and_validate(request).await.into_result()
}

/// Upload the student list (CSV) as a multipart form
pub async fn import_student_file(
    api: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<(), ServiceError> {
    let form = MultipartForm::new().file(STUDENT_UPLOAD_PART, file_name, Some("text/csv"), bytes);
    let request = MutateRequest::post("students/upload")
        .body(Payload::Multipart(form))
        .body_shape(FormShape::new(&[STUDENT_UPLOAD_PART]))
        .json_content(false);
    api.mutate_and_validate(request).await.into_result()
}

/// Delete every student of the selected project
pub async fn delete_all_students(api: &ApiClient) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete("students"))
        .await
        .into_result()
}

/// Delete one student
pub async fn delete_student(api: &ApiClient, id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete(format!("students/{id}")))
        .await
        .into_result()
}

/// Create a student in the selected project
///
/// Credentials are left empty; the backend provisions them.
pub async fn create_student(api: &ApiClient, student: NewStudent) -> Result<(), ServiceError> {
    let body = CreateStudent {
        name: student.name,
        email: String::new(),
        password: Some(String::new()),
        private_key: Some(String::new()),
        gender: student.gender,
        bachelor: student.bachelor,
        team_role: student.team_role,
        team_id: student.team_id,
        project_id: require_project_id(api)?,
    };
    let request = MutateRequest::post("students")
        .body(json(&body)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Patch a student
pub async fn update_student(
    api: &ApiClient,
    id: i64,
    body: &UpdateStudent,
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("students/{id}"))
        .body(json(body)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// Student list as CSV text
pub async fn download_student_file(api: &ApiClient) -> Result<String, ServiceError> {
    api.query_and_validate(QueryRequest::new("students/download", Text))
        .await
        .into_result()
}
