//! Teacher entity

use serde::{Deserialize, Serialize};

/// A coach responsible for a roster of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Ids of the students assigned to this teacher
    #[serde(default)]
    pub student_ids: Vec<String>,
}

impl Teacher {
    /// Whether the given student belongs to this teacher's roster.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|id| id == student_id)
    }
}
