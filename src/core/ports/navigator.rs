//! Navigation port
//!
//! The request pipeline asks the surrounding application to send the user
//! back to the login screen when the backend answers 401.

/// Path the pipeline redirects to when authentication has expired
pub const LOGIN_PATH: &str = "/login";

/// Redirect collaborator
pub trait Navigator: Send + Sync {
    /// Navigate to `path`
    fn redirect(&self, path: &str);
}
