//! Calendar schedule model
//!
//! Represents a workout scheduled (or completed) on a specific date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CalendarEntryId, WorkoutId};

/// A scheduled workout on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Unique identifier
    pub id: CalendarEntryId,

    /// Date the workout is scheduled for
    pub date: NaiveDate,

    /// Which workout is scheduled
    pub workout_id: WorkoutId,

    /// Whether the workout was completed
    #[serde(default)]
    pub completed: bool,

    /// Free-form notes (how the session went, etc.)
    #[serde(default)]
    pub notes: String,
}

impl CalendarEntry {
    /// Schedule a workout on a date
    pub fn new(date: NaiveDate, workout_id: WorkoutId) -> Self {
        Self {
            id: CalendarEntryId::new(),
            date,
            workout_id,
            completed: false,
            notes: String::new(),
        }
    }

    /// Mark the entry completed
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let entry = CalendarEntry::new(date, WorkoutId::new());
        assert_eq!(entry.date, date);
        assert!(!entry.completed);
    }

    #[test]
    fn test_complete() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut entry = CalendarEntry::new(date, WorkoutId::new());
        entry.complete();
        assert!(entry.completed);
    }

    #[test]
    fn test_serde_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let entry = CalendarEntry::new(date, WorkoutId::new());
        let json = serde_json::to_string(&entry).unwrap();
        let back: CalendarEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
