//! Command implementations

mod context;
mod grades;
mod listing;
mod notifications;
mod session;

pub use grades::download_grades;
pub use listing::{sprints, students, teams};
pub use notifications::notifications;
pub use session::{login, logout, status};
