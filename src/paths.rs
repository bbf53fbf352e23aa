//! Centralized path definitions for teamgrade
//!
//! ```text
//! ~/.teamgrade/
//! ├── config.toml     # API URL, transport timeout, session location
//! └── session.toml    # token, selected project, user, role, permissions
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".teamgrade";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Session filename
const SESSION_FILE: &str = "session.toml";

/// Get the global teamgrade directory.
///
/// Returns `~/.teamgrade/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `~/.teamgrade/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    global_dir().join(CONFIG_FILE)
}

/// Get the default session file path.
///
/// Returns `~/.teamgrade/session.toml`. Overridden by `session_file` in the config.
#[must_use]
pub fn session_file() -> PathBuf {
    global_dir().join(SESSION_FILE)
}
