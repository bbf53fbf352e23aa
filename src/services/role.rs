//! Role assignments

use super::json;
use crate::api::{AnyShape, ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{Role, RoleType};

/// Every role assignment
pub async fn get_all_roles(api: &ApiClient) -> Result<Vec<Role>, ServiceError> {
    api.query_and_validate(QueryRequest::new("roles", Schema::<Vec<Role>>::new()))
        .await
        .into_result()
}

/// Grant `roles` to the user with this e-mail address
pub async fn create_role(api: &ApiClient, email: &str, roles: &[RoleType]) -> Result<(), ServiceError> {
    let request = MutateRequest::post(format!("roles/{email}"))
        .body(json(roles)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}
