//! Exercise entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MuscleGroup;

/// A single exercise: either a row in the shared library or a copy embedded
/// in a routine's exercise list. Copies are owned by their routine; editing
/// one routine never affects another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub reps: u32,
    /// Working weight in kilograms; 0 for bodyweight work
    pub weight: f32,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Exercise fields as submitted by a form, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}
