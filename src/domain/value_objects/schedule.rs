//! Weekly schedule value object

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Weekly training schedule attached to a routine.
///
/// Rest days are weekday indices 0-6 with 0 = Sunday, matching how the
/// dashboard's calendar widget numbers the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days_per_week: u8,
    #[serde(default)]
    pub rest_days: BTreeSet<u8>,
}

impl WeeklySchedule {
    pub fn new(days_per_week: u8, rest_days: impl IntoIterator<Item = u8>) -> Self {
        Self {
            days_per_week,
            rest_days: rest_days.into_iter().collect(),
        }
    }

    /// True when the given weekday index (0 = Sunday) is a rest day
    pub fn is_rest_day(&self, weekday: u8) -> bool {
        self.rest_days.contains(&weekday)
    }
}
