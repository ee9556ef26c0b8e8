//! Command handlers for the gymdesk binary
//!
//! Each handler drives one operation against the freshly seeded store and
//! the session resolver, then renders the result in the selected format.

mod payments;
mod progress;
mod routines;
mod session;
mod students;

pub use payments::cmd_payments;
pub use progress::{cmd_log_progress, cmd_progress};
pub use routines::{
    cmd_add_exercise, cmd_add_routine, cmd_exercises, cmd_my_routine, cmd_remove_exercise,
    cmd_remove_routine, cmd_routine, cmd_routines,
};
pub use session::{cmd_login, cmd_logout, cmd_whoami};
pub use students::{
    cmd_add_student, cmd_assign_routine, cmd_credentials, cmd_mark_paid, cmd_remove_student,
    cmd_set_active, cmd_student, cmd_students,
};

use anyhow::{bail, Result};

use gymdesk::{SessionResolver, SessionStore, Student, Teacher, User};

/// Current user, or an error telling the caller to sign in.
fn require_session<'a, S: SessionStore>(resolver: &'a SessionResolver<S>) -> Result<&'a User> {
    match resolver.current_user() {
        Some(user) => Ok(user),
        None => bail!("not signed in; run `gymdesk login <email>` first"),
    }
}

/// Signed-in teacher, or a role error. The returned value is the session
/// snapshot; handlers re-read the store for anything beyond identity.
fn require_teacher<'a, S: SessionStore>(resolver: &'a SessionResolver<S>) -> Result<&'a Teacher> {
    match require_session(resolver)? {
        User::Teacher(teacher) => Ok(teacher),
        User::Student(_) => bail!("this command is for teachers; you are signed in as a student"),
    }
}

/// Signed-in student, or a role error.
fn require_student<'a, S: SessionStore>(resolver: &'a SessionResolver<S>) -> Result<&'a Student> {
    match require_session(resolver)? {
        User::Student(student) => Ok(student),
        User::Teacher(_) => bail!("this command is for students; you are signed in as a teacher"),
    }
}
