//! Core domain of the grading client
//!
//! This module contains the typed domain models and the port traits the
//! request pipeline talks through. It performs no I/O itself.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (User, Team, Sprint, Grade, ...)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
