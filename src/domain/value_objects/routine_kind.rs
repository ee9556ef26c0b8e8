//! Routine kind value object - defines what a routine trains for

use serde::{Deserialize, Serialize};

/// Training goal of a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Strength,
    Hypertrophy,
    Endurance,
    Custom,
}

impl RoutineKind {
    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoutineKind::Strength => "strength",
            RoutineKind::Hypertrophy => "hypertrophy",
            RoutineKind::Endurance => "endurance",
            RoutineKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
