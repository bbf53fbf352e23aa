//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Recording transport and navigator, client harness
//! - `fixtures.rs` - Backend JSON payloads

pub mod fixtures;
pub mod mocks;
