//! Domain models for the grading backend
//!
//! Pure data structures with no I/O dependencies. Field names follow the
//! backend's camelCase JSON; `Create*` / `Update*` types are the request
//! bodies the backend accepts.
//!
//! - [`User`], [`Student`], [`Role`] - who is involved
//! - [`Project`], [`Team`], [`Sprint`] - how the work is organized
//! - [`Grade`], [`GradeType`], [`Bonus`] - how it is evaluated
//! - [`Flag`], [`Notification`], [`Feedback`] - how people communicate

mod auth;
mod bonus;
pub(crate) mod coerce;
mod feedback;
mod flag;
mod grade;
mod grade_type;
mod notification;
mod project;
mod role;
mod sprint;
mod student;
mod team;
mod user;

pub use auth::{AuthRequest, AuthResponse};
pub use bonus::{Bonus, CreateBonus, UpdateBonus};
pub use feedback::{CreateFeedback, Feedback, UpdateFeedback};
pub use flag::{
    CreateFlag, CreateValidationFlag, Flag, FlagType, NewFlag, UpdateFlag, ValidationFlag,
};
pub use grade::{
    CreateGrade, Grade, GradeInput, GradeMap, GradeMatrix, IdentifyGrade, UpdateGrade,
};
pub use grade_type::{GradeType, GradeTypeName, UpdateGradeType};
pub use notification::{CreateNotification, Notification, NotificationType};
pub use project::{CreateProject, Project, ProjectPhase, UpdateProject};
pub use role::{Role, RoleType};
pub use sprint::{CreateSprint, Sprint, SprintEndType, UpdateSprint};
pub use student::{CreateStudent, Gender, NewStudent, Student, UpdateStudent};
pub use team::{Criteria, CreateTeam, GenerateTeams, PresentationOrder, Team, UpdateTeam};
pub use user::{CreateUser, Permission, UpdateUser, User};
