//! Login, logout and status commands

use teamgrade::config::ClientConfig;
use teamgrade::output::{OperationResult, OutputMode, StatusReport};
use teamgrade::services::auth;

use super::context;

/// Log in and persist the session
pub async fn login(email: &str, password: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = ClientConfig::load();
    let api = context::connect(&config)?;

    auth::login(&api, email, password).await?;
    let user = api.session().user_id().unwrap_or_default();
    OperationResult::ok(format!("Logged in as user {user}")).render(output_mode);
    Ok(())
}

/// Forget the stored session
pub fn logout(output_mode: OutputMode) -> anyhow::Result<()> {
    let config = ClientConfig::load();
    context::session_store(&config).remove_all()?;
    OperationResult::ok("Logged out").render(output_mode);
    Ok(())
}

/// Show configuration and session state without contacting the backend
pub fn status(output_mode: OutputMode) -> anyhow::Result<()> {
    let config = ClientConfig::load();
    let session = context::session_store(&config);

    StatusReport {
        api_url: config.api_url().ok(),
        logged_in: session.token().is_some(),
        user_id: session.user_id(),
        project_id: session.project_id(),
        role: session.role().map(|role| role.to_string()),
        permissions: session.permissions().len(),
    }
    .render(output_mode);
    Ok(())
}
