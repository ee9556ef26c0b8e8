//! Routine entity

use serde::{Deserialize, Serialize};

use crate::domain::entities::Exercise;
use crate::domain::value_objects::{RoutineKind, RoutineLevel, WeeklySchedule};

/// A workout routine assembled by a teacher and assignable to students.
///
/// The exercise list holds the routine's own copies; the shared exercise
/// library is a separate collection on the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: RoutineLevel,
    pub kind: RoutineKind,
    /// Id of the teacher who created the routine
    pub created_by: String,
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub schedule: Option<WeeklySchedule>,
}

impl Routine {
    /// Look up one of this routine's exercises by id
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }
}

/// Routine fields as submitted by a form, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoutine {
    pub name: String,
    pub description: String,
    pub level: RoutineLevel,
    pub kind: RoutineKind,
    pub created_by: String,
    pub exercises: Vec<Exercise>,
    pub schedule: Option<WeeklySchedule>,
}
