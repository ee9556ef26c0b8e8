//! Authenticated user, either side of the teacher/student divide

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Student, Teacher};
use crate::domain::value_objects::UserRole;

/// The identity resolved at login. Wraps the full entity so callers can
/// reach role-specific fields after matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Student(Student),
    Teacher(Teacher),
}

impl User {
    pub fn id(&self) -> &str {
        match self {
            User::Student(student) => &student.id,
            User::Teacher(teacher) => &teacher.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Student(student) => &student.name,
            User::Teacher(teacher) => &teacher.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            User::Student(student) => &student.email,
            User::Teacher(teacher) => &teacher.email,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            User::Student(_) => UserRole::Student,
            User::Teacher(_) => UserRole::Teacher,
        }
    }
}
