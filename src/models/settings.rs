//! User settings
//!
//! Preferences that travel with the dataset (and therefore with backups),
//! as opposed to machine-local configuration.

use serde::{Deserialize, Serialize};

/// Unit system preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters (default)
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

/// User settings stored as part of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Preferred unit system
    #[serde(default)]
    pub unit_system: UnitSystem,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Daily workout reminder time ("HH:MM"), if enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,

    /// Default rest between sets, in seconds
    #[serde(default = "default_rest_seconds")]
    pub default_rest_seconds: u32,
}

fn default_first_day_of_week() -> u8 {
    1 // Monday
}

fn default_rest_seconds() -> u32 {
    90
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::default(),
            first_day_of_week: default_first_day_of_week(),
            reminder_time: None,
            default_rest_seconds: default_rest_seconds(),
        }
    }
}
