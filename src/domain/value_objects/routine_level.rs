//! Routine difficulty level value object

use serde::{Deserialize, Serialize};

/// Difficulty level of a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoutineLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl RoutineLevel {
    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoutineLevel::Beginner => "beginner",
            RoutineLevel::Intermediate => "intermediate",
            RoutineLevel::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for RoutineLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
