//! Staff answers to validation flags

use super::json;
use crate::api::{ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateValidationFlag, ValidationFlag};

/// Answers given to a validation flag
pub async fn get_validation_flags_by_flag_id(
    api: &ApiClient,
    flag_id: i64,
) -> Result<Vec<ValidationFlag>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("flags/{flag_id}/validation"),
        Schema::<Vec<ValidationFlag>>::new(),
    ))
    .await
    .into_result()
}

/// Record the answer of `author_id` to a validation flag
pub async fn update_validation_flag(
    api: &ApiClient,
    flag_id: i64,
    author_id: i64,
    confirmed: bool,
) -> Result<(), ServiceError> {
    let body = CreateValidationFlag {
        confirmed: Some(confirmed),
        author_id,
        flag_id,
    };
    let request = MutateRequest::patch(format!("flags/{flag_id}/validation/{author_id}"))
        .body(json(&body)?)
        .body_shape(Schema::<CreateValidationFlag>::new());
    api.mutate_and_validate(request).await.into_result()
}
