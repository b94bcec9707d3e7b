//! Training plan model
//!
//! A plan groups workouts into a repeating program (e.g., a push/pull/legs
//! split run over a number of weeks).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{PlanId, WorkoutId};

/// A training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier
    pub id: PlanId,

    /// Plan name (e.g., "PPL 6-week")
    pub name: String,

    /// Workouts in rotation order
    #[serde(default)]
    pub workout_ids: Vec<WorkoutId>,

    /// Planned duration in weeks, if fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the plan was created
    pub created_at: DateTime<Utc>,
}

impl Plan {
    /// Create a new empty plan with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlanId::new(),
            name: name.into(),
            workout_ids: Vec::new(),
            duration_weeks: None,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Validate the plan
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Plan name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan() {
        let p = Plan::new("Starting Strength");
        assert!(p.workout_ids.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut p = Plan::new("PPL");
        p.workout_ids.push(WorkoutId::new());
        p.duration_weeks = Some(6);
        let json = serde_json::to_string(&p).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
