//! In-memory session store

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::models::{Permission, RoleType};
use crate::core::ports::{SessionError, SessionStore};

#[derive(Debug, Default)]
struct State {
    token: Option<String>,
    project_id: Option<i64>,
    user_id: Option<i64>,
    role: Option<RoleType>,
    permissions: Vec<Permission>,
}

/// Session kept in process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RwLock<State>,
}

impl MemorySessionStore {
    /// Empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already holding a token and a selected project
    #[must_use]
    pub fn logged_in(token: &str, project_id: i64) -> Self {
        Self {
            state: RwLock::new(State {
                token: Some(token.to_string()),
                project_id: Some(project_id),
                ..State::default()
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.write().token = Some(token.to_string());
        Ok(())
    }

    fn project_id(&self) -> Option<i64> {
        self.read().project_id
    }

    fn set_project_id(&self, id: i64) -> Result<(), SessionError> {
        self.write().project_id = Some(id);
        Ok(())
    }

    fn user_id(&self) -> Option<i64> {
        self.read().user_id
    }

    fn set_user_id(&self, id: i64) -> Result<(), SessionError> {
        self.write().user_id = Some(id);
        Ok(())
    }

    fn role(&self) -> Option<RoleType> {
        self.read().role
    }

    fn set_role(&self, role: RoleType) -> Result<(), SessionError> {
        self.write().role = Some(role);
        Ok(())
    }

    fn permissions(&self) -> Vec<Permission> {
        self.read().permissions.clone()
    }

    fn set_permissions(&self, permissions: &[Permission]) -> Result<(), SessionError> {
        self.write().permissions = permissions.to_vec();
        Ok(())
    }

    fn remove_all(&self) -> Result<(), SessionError> {
        *self.write() = State::default();
        Ok(())
    }
}
