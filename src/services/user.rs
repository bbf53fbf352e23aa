//! Users, their roles and permissions

use super::{json, require_user_id};
use crate::api::{AnyShape, ApiClient, MutateRequest, QueryRequest, Schema, ServiceError};
use crate::core::models::{CreateUser, Permission, RoleType, UpdateUser, User};

/// Every user
pub async fn get_all_users(api: &ApiClient) -> Result<Vec<User>, ServiceError> {
    api.query_and_validate(QueryRequest::new("users", Schema::<Vec<User>>::new()))
        .await
        .into_result()
}

/// The user stored in the session
pub async fn get_connected_user(api: &ApiClient) -> Result<User, ServiceError> {
    let id = require_user_id(api)?;
    get_user_by_id(api, id).await
}

/// Users holding `role`
pub async fn get_users_by_role(api: &ApiClient, role: RoleType) -> Result<Vec<User>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("roles/{role}/users"),
        Schema::<Vec<User>>::new(),
    ))
    .await
    .into_result()
}

/// Replace a user's fields
pub async fn update_user(api: &ApiClient, id: i64, body: &UpdateUser) -> Result<(), ServiceError> {
    let request = MutateRequest::put(format!("users/{id}"))
        .body(json(body)?)
        .body_shape(AnyShape);
    api.mutate_and_validate(request).await.into_result()
}

/// One user
pub async fn get_user_by_id(api: &ApiClient, id: i64) -> Result<User, ServiceError> {
    api.query_and_validate(QueryRequest::new(format!("users/{id}"), Schema::<User>::new()))
        .await
        .into_result()
}

/// One user, looked up by display name
pub async fn get_user_by_name(api: &ApiClient, name: &str) -> Result<User, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("users/name/{name}"),
        Schema::<User>::new(),
    ))
    .await
    .into_result()
}

/// Permissions granted to user `id`
pub async fn get_all_permissions(api: &ApiClient, id: i64) -> Result<Vec<Permission>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("users/{id}/permissions"),
        Schema::<Vec<Permission>>::new(),
    ))
    .await
    .into_result()
}

/// Whether the session grants `permission` (no network call)
#[must_use]
pub fn has_permission(api: &ApiClient, permission: &Permission) -> bool {
    api.session().permissions().contains(permission)
}

/// Roles held by user `id`
pub async fn get_all_roles(api: &ApiClient, id: i64) -> Result<Vec<RoleType>, ServiceError> {
    api.query_and_validate(QueryRequest::new(
        format!("users/{id}/roles"),
        Schema::<Vec<RoleType>>::new(),
    ))
    .await
    .into_result()
}

/// Create a user
pub async fn create_user(api: &ApiClient, body: &CreateUser) -> Result<(), ServiceError> {
    let request = MutateRequest::post("users")
        .body(json(body)?)
        .body_shape(Schema::<CreateUser>::new());
    api.mutate_and_validate(request).await.into_result()
}

/// Delete a user
pub async fn delete_user(api: &ApiClient, id: i64) -> Result<(), ServiceError> {
    api.mutate_and_validate(MutateRequest::delete(format!("users/delete/{id}")))
        .await
        .into_result()
}
