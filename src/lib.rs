//! teamgrade - typed, validated client for a student-project grading and
//! team-management backend
//!
//! Every backend call goes through one of three pipelines on
//! [`api::ApiClient`] (query, mutate, login), which build the URL, attach the
//! bearer token and selected project, check shapes on the way in and out, and
//! fold every failure into an [`api::ApiResult`]. The [`services`] module puts
//! one typed function in front of each backend route.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod services;
