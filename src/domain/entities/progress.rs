//! Progress entry entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged workout result. Append-only: entries are never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub student_id: String,
    /// Exercise the entry refers to; not re-validated against the student's
    /// current routine (the routine may change after logging)
    pub exercise_id: String,
    pub date: NaiveDate,
    pub sets_completed: u32,
    pub reps_completed: u32,
    /// Weight used in kilograms
    pub weight_used: f32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Progress fields as submitted by the logging form, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgressEntry {
    pub student_id: String,
    pub exercise_id: String,
    pub date: NaiveDate,
    pub sets_completed: u32,
    pub reps_completed: u32,
    pub weight_used: f32,
    pub notes: Option<String>,
}
