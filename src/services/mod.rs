//! Domain services
//!
//! One module per backend entity. Every operation is a free async function
//! taking the [`ApiClient`] and returning `Result<T, ServiceError>`; a failed
//! pipeline call surfaces its message unchanged.
//!
//! Composite operations (login, grade upsert, notification fan-out) issue
//! independent calls in sequence and never roll back.

pub mod auth;
pub mod bonus;
pub mod feedback;
pub mod flag;
pub mod grade;
pub mod grade_type;
pub mod notification;
pub mod project;
pub mod role;
pub mod sprint;
pub mod student;
pub mod team;
pub mod user;
pub mod validation_flag;

use serde::Serialize;

use crate::api::{ApiClient, Payload, ServiceError};
use crate::core::ports::LOGIN_PATH;

/// Connected user, or a redirect to the login page
pub(crate) fn require_user_id(api: &ApiClient) -> Result<i64, ServiceError> {
    api.session().user_id().ok_or_else(|| {
        api.redirect(LOGIN_PATH);
        ServiceError::from("No user logged in")
    })
}

/// Selected project
pub(crate) fn require_project_id(api: &ApiClient) -> Result<i64, ServiceError> {
    api.session()
        .project_id()
        .ok_or_else(|| ServiceError::from("No project selected"))
}

/// JSON payload from a typed body
pub(crate) fn json<T: Serialize + ?Sized>(body: &T) -> Result<Payload, ServiceError> {
    Ok(Payload::json(body)?)
}
