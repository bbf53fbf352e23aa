//! Grade types and their grading scales

use serde_json::Value;

use super::json;
use crate::api::{
    AnyShape, ApiClient, FormShape, MutateRequest, Payload, QueryRequest, Schema, ServiceError,
};
use crate::core::models::{GradeType, GradeTypeName, UpdateGradeType};
use crate::core::ports::MultipartForm;

/// Form part carrying a grading scale
pub const SCALE_UPLOAD_PART: &str = "file";

/// Imported grade types, `Moyenne` first
pub async fn get_all_imported_grade_types(api: &ApiClient) -> Result<Vec<GradeType>, ServiceError> {
    let grade_types = api
        .query_and_validate(QueryRequest::new(
            "grade-types/imported",
            Schema::<Vec<GradeType>>::new(),
        ))
        .await
        .into_result()?;
    Ok(average_first(grade_types)
        .into_iter()
        .filter(|g| g.imported)
        .collect())
}

fn average_first(mut grade_types: Vec<GradeType>) -> Vec<GradeType> {
    if let Some(index) = grade_types.iter().position(|g| g.name == GradeTypeName::Average.as_str()) {
        let average = grade_types.remove(index);
        grade_types.insert(0, average);
    }
    grade_types
}

/// Built-in grade types
pub async fn get_all_unimported_grade_types(
    api: &ApiClient,
) -> Result<Vec<GradeType>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        "grade-types/unimported",
        Schema::<Vec<GradeType>>::new(),
    ))
    .await
    .into_result()
}

/// Patch a grade type
pub async fn update_grade_type(
    api: &ApiClient,
    id: i64,
    body: &UpdateGradeType,
) -> Result<(), ServiceError> {
    let request = MutateRequest::patch(format!("grade-types/{id}"))
        .body(json(body)?)
        .body_shape(Schema::<UpdateGradeType>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Grade type with this name
pub async fn get_grade_type_by_name(api: &ApiClient, name: &str) -> Result<GradeType, ServiceError> {
    let request =
        QueryRequest::new("grade-types/name", Schema::<GradeType>::new()).param("name", name);
    api.query_and_validate(request).await.into_result()
}

/// Grading scale of a built-in grade type, as raw text
pub async fn download_grade_scale(
    api: &ApiClient,
    name: GradeTypeName,
) -> Result<String, ServiceError> {
    let grade_type = get_grade_type_by_name(api, name.as_str()).await?;
    let raw = api
        .query_and_validate(QueryRequest::new(
            format!("grade-types/{}/download-grade-scale", grade_type.id),
            AnyShape,
        ))
        .await
        .into_result()?;
    Ok(match raw {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Upload a grading scale file
pub async fn upload_grade_scale(
    api: &ApiClient,
    grade_type_id: i64,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<(), ServiceError> {
    let form = MultipartForm::new().file(SCALE_UPLOAD_PART, file_name, Some("text/plain"), bytes);
    let request = MutateRequest::post(format!("grade-types/{grade_type_id}/upload-grade-scale"))
        .body(Payload::Multipart(form))
        .body_shape(FormShape::new(&[SCALE_UPLOAD_PART]))
        .json_content(false);
    api.mutate_and_validate(request).await.into_result()
}

/// Remove the grading scale of a grade type
pub async fn delete_grade_scale(api: &ApiClient, grade_type_id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete(format!(
        "grade-types/{grade_type_id}/delete-grade-scale"
    )))
    .await
    .into_result()
}
