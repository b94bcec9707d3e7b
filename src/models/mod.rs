//! Core data models for LiftLog
//!
//! This module contains all the data structures that represent the fitness
//! domain: exercises, workouts, plans, calendar entries, and settings.

pub mod calendar;
pub mod dataset;
pub mod exercise;
pub mod ids;
pub mod plan;
pub mod settings;
pub mod weight;
pub mod workout;

pub use calendar::CalendarEntry;
pub use dataset::Dataset;
pub use exercise::{Exercise, MuscleGroup};
pub use ids::{CalendarEntryId, ExerciseId, PlanId, WorkoutId};
pub use plan::Plan;
pub use settings::{UnitSystem, UserSettings};
pub use weight::Weight;
pub use workout::{Workout, WorkoutExercise};
