//! Workout model
//!
//! A workout is an ordered list of exercise prescriptions (sets, reps,
//! optional load) that can be scheduled on the calendar or grouped into plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExerciseId, WorkoutId};
use super::weight::Weight;

/// One exercise prescription inside a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Which exercise from the library
    pub exercise_id: ExerciseId,

    /// Number of sets
    pub sets: u32,

    /// Target reps per set
    pub reps: u32,

    /// Target load, if the exercise is weighted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// Rest between sets, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

impl WorkoutExercise {
    /// Create a bodyweight prescription
    pub fn new(exercise_id: ExerciseId, sets: u32, reps: u32) -> Self {
        Self {
            exercise_id,
            sets,
            reps,
            weight: None,
            rest_seconds: None,
        }
    }

    /// Create a weighted prescription
    pub fn weighted(exercise_id: ExerciseId, sets: u32, reps: u32, weight: Weight) -> Self {
        Self {
            exercise_id,
            sets,
            reps,
            weight: Some(weight),
            rest_seconds: None,
        }
    }

    /// Total prescribed volume (sets x reps)
    pub fn volume(&self) -> u32 {
        self.sets * self.reps
    }
}

/// A workout template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,

    /// Workout name (e.g., "Push Day A")
    pub name: String,

    /// Ordered exercise prescriptions
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the workout was created
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Create a new empty workout with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkoutId::new(),
            name: name.into(),
            exercises: Vec::new(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Validate the workout
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Workout name cannot be empty".to_string());
        }
        for (i, ex) in self.exercises.iter().enumerate() {
            if ex.sets == 0 {
                return Err(format!("Exercise {} has zero sets", i + 1));
            }
        }
        Ok(())
    }
}
