//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - reqwest-backed [`HttpTransport`](crate::core::ports::HttpTransport)
//! - `session/` - in-memory and TOML file session stores
//! - `navigator` - login redirect handling for non-browser hosts
//! - `cipher` - pass-through value encryption

mod cipher;
pub mod http;
mod navigator;
pub mod session;

pub use cipher::Plaintext;
pub use http::ReqwestTransport;
pub use navigator::{ClearSessionNavigator, LogNavigator};
pub use session::{FileSessionStore, MemorySessionStore};
