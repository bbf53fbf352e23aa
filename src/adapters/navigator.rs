//! Navigators for hosts without a browser router

use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::core::ports::{Navigator, SessionStore};

/// Logs redirect requests and does nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        warn!("Redirect requested to {path}");
    }
}

/// Clears the session on redirect so the next command asks for a new login
#[derive(Clone)]
pub struct ClearSessionNavigator {
    session: Arc<dyn SessionStore>,
}

impl ClearSessionNavigator {
    /// Navigator clearing `session`
    #[must_use]
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl fmt::Debug for ClearSessionNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearSessionNavigator").finish_non_exhaustive()
    }
}

impl Navigator for ClearSessionNavigator {
    fn redirect(&self, path: &str) {
        if let Err(e) = self.session.remove_all() {
            warn!("Failed to clear session: {e}");
        }
        warn!("Session expired, log in again (redirected to {path})");
    }
}
