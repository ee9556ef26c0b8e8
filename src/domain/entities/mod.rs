//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Teacher` / `Student` / `User` - The people using the gym
//! - `Exercise` / `Routine` - What they train with
//! - `ProgressEntry` / `Payment` - What they logged and what they owe
//! - `Gym` - The store holding all of the above

mod exercise;
mod gym;
mod payment;
mod progress;
mod routine;
mod student;
mod teacher;
mod user;

pub use exercise::{Exercise, NewExercise};
pub use gym::Gym;
pub use payment::Payment;
pub use progress::{NewProgressEntry, ProgressEntry};
pub use routine::{NewRoutine, Routine};
pub use student::{NewStudent, Student};
pub use teacher::Teacher;
pub use user::User;
