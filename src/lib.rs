//! Gymdesk - gym management domain layer
//!
//! Gymdesk holds the in-memory state of a small gym: teachers and their
//! student rosters, workout routines, the exercise library, progress logs,
//! and payment records. A session resolver maps an email to a role-tagged
//! user and keeps that identity across restarts. The `gymdesk` binary
//! drives the same operations from the command line.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    Exercise, Gym, NewExercise, NewProgressEntry, NewRoutine, NewStudent, Payment, ProgressEntry,
    Routine, Student, Teacher, User,
};
pub use domain::ports::{SessionStore, SessionStoreError};
pub use domain::services::{SessionResolver, SessionState};
pub use domain::value_objects::{
    derive_username, Credentials, MuscleGroup, PaymentStatus, RoutineKind, RoutineLevel, UserRole,
    WeeklySchedule,
};
pub use error::{GymdeskError, GymdeskResult};
pub use infrastructure::JsonSessionStore;
