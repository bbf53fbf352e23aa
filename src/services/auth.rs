//! Login and logout

use log::{info, warn};

use super::{json, user};
use crate::api::{ApiClient, Checked, LoginRequest, Schema, ServiceError};
use crate::core::models::{AuthRequest, AuthResponse};

/// Authenticate and fill the session
///
/// Clears the session and selects project 0 before calling `auth/login`, then
/// stores user, token and project, and finally the first role and the
/// permissions of the user.
pub async fn login(api: &ApiClient, login: &str, password: &str) -> Result<(), ServiceError> {
    let session = api.session();
    session.remove_all()?;
    session.set_project_id(0)?;

    let credentials = AuthRequest {
        login: login.to_string(),
        password: password.to_string(),
    };
    let request = LoginRequest::new("auth/login", Schema::<AuthResponse>::new())
        .body(json(&credentials)?)
        .body_shape(Checked::<AuthRequest>::new());
    let response = api.login_and_validate(request).await.into_result()?;

    session.set_user_id(response.id)?;
    session.set_token(&response.access_token)?;
    session.set_project_id(response.id_project)?;

    let roles = user::get_all_roles(api, response.id).await?;
    match roles.first() {
        Some(role) => session.set_role(*role)?,
        None => warn!("User {} has no role", response.id),
    }

    let permissions = user::get_all_permissions(api, response.id).await?;
    session.set_permissions(&permissions)?;
    info!("Logged in as user {}", response.id);
    Ok(())
}

/// Forget the session
pub fn logout(api: &ApiClient) -> Result<(), ServiceError> {
    api.session().remove_all()?;
    Ok(())
}
