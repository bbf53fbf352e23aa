//! TOML file session store
//!
//! Each value is kept as an entry with its own expiry, encrypted through the
//! configured [`Cipher`]:
//!
//! ```toml
//! [entries.token]
//! value = "eyJhbGciOi..."
//! expires_at = "2026-10-24T09:00:00Z"
//! ```
//!
//! Expired, unreadable or undecryptable entries read as absent.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::keys;
use crate::adapters::Plaintext;
use crate::core::models::{Permission, RoleType};
use crate::core::ports::{Cipher, SessionError, SessionStore};

/// Lifetime of a stored value (the web client's cookie max-age)
pub const DEFAULT_TTL: TimeDelta = TimeDelta::days(7);

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    entries: BTreeMap<String, SessionEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Session persisted in a TOML file
pub struct FileSessionStore {
    path: PathBuf,
    cipher: Box<dyn Cipher>,
    ttl: TimeDelta,
    lock: Mutex<()>,
}

impl fmt::Debug for FileSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSessionStore")
            .field("path", &self.path)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl FileSessionStore {
    /// Store at `path`, values kept in plain text
    ///
    /// The token is readable by anyone who can read the file. On Unix the
    /// file is written with mode `0600`; use [`Self::with_cipher`] to encrypt
    /// values at rest.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_cipher(path, Box::new(Plaintext))
    }

    /// Store at `path`, values passed through `cipher`
    #[must_use]
    pub fn with_cipher(path: impl Into<PathBuf>, cipher: Box<dyn Cipher>) -> Self {
        Self {
            path: path.into(),
            cipher,
            ttl: DEFAULT_TTL,
            lock: Mutex::new(()),
        }
    }

    /// Override the lifetime of newly written values
    #[must_use]
    pub const fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SessionFile, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let file = match self.load() {
            Ok(file) => file,
            Err(e) => {
                debug!("Ignoring unreadable session file {}: {e}", self.path.display());
                return None;
            },
        };
        let entry = file.entries.get(key)?;
        if entry.expires_at <= Utc::now() {
            return None;
        }
        self.cipher.decrypt(&entry.value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = self.load()?;
        let now = Utc::now();
        file.entries.retain(|_, entry| entry.expires_at > now);
        file.entries.insert(
            key.to_string(),
            SessionEntry {
                value: self.cipher.encrypt(value),
                expires_at: now + self.ttl,
            },
        );

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&file)?)?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.get(keys::TOKEN)
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.set(keys::TOKEN, token)
    }

    fn project_id(&self) -> Option<i64> {
        self.get(keys::PROJECT)?.parse().ok()
    }

    fn set_project_id(&self, id: i64) -> Result<(), SessionError> {
        self.set(keys::PROJECT, &id.to_string())
    }

    fn user_id(&self) -> Option<i64> {
        self.get(keys::USER)?.parse().ok()
    }

    fn set_user_id(&self, id: i64) -> Result<(), SessionError> {
        self.set(keys::USER, &id.to_string())
    }

    fn role(&self) -> Option<RoleType> {
        self.get(keys::ROLE)?.parse().ok()
    }

    fn set_role(&self, role: RoleType) -> Result<(), SessionError> {
        self.set(keys::ROLE, role.as_str())
    }

    fn permissions(&self) -> Vec<Permission> {
        self.get(keys::PERMISSIONS)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn set_permissions(&self, permissions: &[Permission]) -> Result<(), SessionError> {
        self.set(keys::PERMISSIONS, &serde_json::to_string(permissions)?)
    }

    fn remove_all(&self) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
