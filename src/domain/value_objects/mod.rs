//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: roles, statuses,
//! training enums, schedules, and credential pairs.

mod credentials;
mod muscle_group;
mod payment_status;
mod role;
mod routine_kind;
mod routine_level;
mod schedule;

pub use credentials::{derive_username, Credentials};
pub use muscle_group::MuscleGroup;
pub use payment_status::PaymentStatus;
pub use role::UserRole;
pub use routine_kind::RoutineKind;
pub use routine_level::RoutineLevel;
pub use schedule::WeeklySchedule;
