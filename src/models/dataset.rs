//! Dataset aggregate
//!
//! The complete serializable snapshot of the application's local data. The
//! backup codec encodes exactly this; the data store replaces exactly this.

use serde::{Deserialize, Serialize};

use super::calendar::CalendarEntry;
use super::exercise::Exercise;
use super::plan::Plan;
use super::settings::UserSettings;
use super::workout::Workout;

/// The full local dataset: every collection, possibly empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Exercise library
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    /// Workout templates
    #[serde(default)]
    pub workouts: Vec<Workout>,

    /// Training plans
    #[serde(default)]
    pub plans: Vec<Plan>,

    /// Calendar schedule entries
    #[serde(default)]
    pub calendar_entries: Vec<CalendarEntry>,

    /// User settings (part of the dataset, so backups carry them)
    #[serde(default)]
    pub settings: UserSettings,
}

impl Dataset {
    /// Check whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
            && self.workouts.is_empty()
            && self.plans.is_empty()
            && self.calendar_entries.is_empty()
    }

    /// One-line summary of collection sizes, for user-facing confirmation
    pub fn summary(&self) -> String {
        format!(
            "{} exercises, {} workouts, {} plans, {} calendar entries",
            self.exercises.len(),
            self.workouts.len(),
            self.plans.len(),
            self.calendar_entries.len()
        )
    }
}
