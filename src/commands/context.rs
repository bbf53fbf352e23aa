//! Wiring of the client from config and the session file

use std::sync::Arc;

use teamgrade::adapters::{ClearSessionNavigator, FileSessionStore, ReqwestTransport};
use teamgrade::api::ApiClient;
use teamgrade::config::ClientConfig;
use teamgrade::core::ports::SessionStore;

/// Session file named by the config
pub fn session_store(config: &ClientConfig) -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::new(config.session_path()))
}

/// Client talking to the configured backend
///
/// An expired session is cleared on 401 so the next command asks for a login.
pub fn connect(config: &ClientConfig) -> anyhow::Result<ApiClient> {
    let api_url = config.api_url()?;
    let transport = match config.timeout() {
        Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
        None => ReqwestTransport::new()?,
    };
    let session = session_store(config);
    let navigator = ClearSessionNavigator::new(Arc::clone(&session));
    Ok(ApiClient::new(
        Some(&api_url),
        Arc::new(transport),
        session,
        Arc::new(navigator),
    )?)
}
