//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping common prefixes
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExerciseId, "exr-");
define_id!(WorkoutId, "wkt-");
define_id!(PlanId, "pln-");
define_id!(CalendarEntryId, "cal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ExerciseId::new();
        let b = ExerciseId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_prefix() {
        let id = WorkoutId::new();
        assert!(id.to_string().starts_with("wkt-"));
    }

    #[test]
    fn test_parse_round_trip() {
        let id = PlanId::new();
        let parsed = PlanId::parse(&id.as_uuid().to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_str_with_prefix() {
        let id = CalendarEntryId::new();
        let full = format!("cal-{}", id.as_uuid());
        let parsed: CalendarEntryId = full.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ExerciseId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, not an object
        assert!(json.starts_with('"'));
        let back: ExerciseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
