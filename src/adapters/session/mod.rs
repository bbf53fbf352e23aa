//! Session store implementations
//!
//! - [`MemorySessionStore`] - process-local, used by tests and embedders
//! - [`FileSessionStore`] - TOML file with per-entry expiry, used by the CLI

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Entry names, matching the cookie names of the web client
pub(crate) mod keys {
    pub const TOKEN: &str = "token";
    pub const PROJECT: &str = "currentProject";
    pub const USER: &str = "user";
    pub const ROLE: &str = "role";
    pub const PERMISSIONS: &str = "permissions";
}
