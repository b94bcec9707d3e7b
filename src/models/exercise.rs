//! Exercise model
//!
//! Represents entries in the exercise library (squat, bench press, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExerciseId;

/// Primary muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Shoulders
    Shoulders,
    /// Arms (biceps, triceps, forearms)
    Arms,
    /// Legs (quads, hamstrings, calves)
    Legs,
    /// Core/abdominals
    Core,
    /// Whole-body movements
    FullBody,
    /// Other/unclassified
    Other,
}

impl MuscleGroup {
    /// Parse muscle group from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chest" => Some(Self::Chest),
            "back" => Some(Self::Back),
            "shoulders" | "delts" => Some(Self::Shoulders),
            "arms" | "biceps" | "triceps" => Some(Self::Arms),
            "legs" | "quads" | "hamstrings" => Some(Self::Legs),
            "core" | "abs" => Some(Self::Core),
            "full_body" | "fullbody" | "full" => Some(Self::FullBody),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Default for MuscleGroup {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chest => write!(f, "Chest"),
            Self::Back => write!(f, "Back"),
            Self::Shoulders => write!(f, "Shoulders"),
            Self::Arms => write!(f, "Arms"),
            Self::Legs => write!(f, "Legs"),
            Self::Core => write!(f, "Core"),
            Self::FullBody => write!(f, "Full Body"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// An exercise in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: ExerciseId,

    /// Exercise name (e.g., "Barbell Back Squat")
    pub name: String,

    /// Primary muscle group
    #[serde(default)]
    pub muscle_group: MuscleGroup,

    /// Equipment needed (e.g., "barbell", "dumbbells")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,

    /// Free-form notes (cues, setup, etc.)
    #[serde(default)]
    pub notes: String,

    /// When the exercise was added to the library
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Create a new exercise with a fresh ID
    pub fn new(name: impl Into<String>, muscle_group: MuscleGroup) -> Self {
        Self {
            id: ExerciseId::new(),
            name: name.into(),
            muscle_group,
            equipment: None,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Validate the exercise
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Exercise name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exercise() {
        let ex = Exercise::new("Deadlift", MuscleGroup::FullBody);
        assert_eq!(ex.name, "Deadlift");
        assert_eq!(ex.muscle_group, MuscleGroup::FullBody);
        assert!(ex.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let ex = Exercise::new("  ", MuscleGroup::Legs);
        assert!(ex.validate().is_err());
    }

    #[test]
    fn test_muscle_group_parse() {
        assert_eq!(MuscleGroup::parse("chest"), Some(MuscleGroup::Chest));
        assert_eq!(MuscleGroup::parse("ABS"), Some(MuscleGroup::Core));
        assert_eq!(MuscleGroup::parse("cardio"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let ex = Exercise::new("Bench Press", MuscleGroup::Chest);
        let json = serde_json::to_string(&ex).unwrap();
        let back: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(ex, back);
    }
}
