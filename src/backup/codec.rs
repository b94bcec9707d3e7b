//! Backup serialization codec
//!
//! Converts the full dataset to and from a single versioned text payload and
//! validates structural integrity on decode. Decoding is pure: it never
//! touches the live dataset; applying a decoded dataset is the restore
//! orchestrator's job.
//!
//! # Wire format
//!
//! UTF-8 JSON with camelCase top-level keys:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "generatedAt": "2026-08-31T12:00:00Z",
//!   "exercises": [...],
//!   "workouts": [...],
//!   "plans": [...],
//!   "calendarEntries": [...],
//!   "settings": {...}
//! }
//! ```
//!
//! Unknown top-level keys are tolerated and ignored, so payloads written by
//! newer minor revisions still read. `schemaVersion` is checked before any
//! section is trusted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{CalendarEntry, Dataset, Exercise, Plan, UserSettings, Workout};

/// Highest schema version this reader understands
pub const SCHEMA_VERSION: u32 = 1;

/// Required collection sections, in validation order
const REQUIRED_SECTIONS: [&str; 5] = [
    "exercises",
    "workouts",
    "plans",
    "calendarEntries",
    "settings",
];

/// A structurally invalid backup payload
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The text is not syntactically well-formed, or a section has the
    /// wrong shape
    #[error("backup file is not well-formed: {0}")]
    Malformed(String),

    /// The payload was written by a newer application version
    #[error("backup schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A required collection section is absent
    #[error("backup is missing the '{0}' section")]
    MissingSection(&'static str),
}

/// The versioned backup document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupPayload {
    /// Schema version for migration support
    schema_version: u32,
    /// When the backup was generated
    generated_at: DateTime<Utc>,
    /// Exercise library
    exercises: Vec<Exercise>,
    /// Workout templates
    workouts: Vec<Workout>,
    /// Training plans
    plans: Vec<Plan>,
    /// Calendar schedule entries
    calendar_entries: Vec<CalendarEntry>,
    /// User settings
    settings: UserSettings,
    /// Unknown top-level keys from newer writers, preserved on parse
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Encode the dataset as versioned payload text
///
/// Deterministic apart from the regenerated `generatedAt` timestamp, and
/// human-diffable (pretty-printed, fixed key order). Cannot fail for any
/// valid in-memory dataset: the payload is a closed serde tree, so a
/// serializer error here is a programming defect, not an error path.
pub fn encode(dataset: &Dataset) -> String {
    let payload = BackupPayload {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        exercises: dataset.exercises.clone(),
        workouts: dataset.workouts.clone(),
        plans: dataset.plans.clone(),
        calendar_entries: dataset.calendar_entries.clone(),
        settings: dataset.settings.clone(),
        extra: BTreeMap::new(),
    };

    serde_json::to_string_pretty(&payload)
        .expect("backup payload serialization is infallible for valid datasets")
}

/// Decode payload text into a dataset, validating structure first
///
/// Validation order: syntax, then `schemaVersion`, then required sections.
/// Nothing beyond the version field is trusted until the version check
/// passes.
pub fn decode(text: &str) -> Result<Dataset, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::Malformed("top level is not an object".to_string()))?;

    let version = object
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            ValidationError::Malformed("missing or non-numeric schemaVersion".to_string())
        })?;

    let version = u32::try_from(version).map_err(|_| ValidationError::UnsupportedVersion {
        found: u32::MAX,
        supported: SCHEMA_VERSION,
    })?;

    if version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    for section in REQUIRED_SECTIONS {
        if !object.contains_key(section) {
            return Err(ValidationError::MissingSection(section));
        }
    }

    let payload: BackupPayload =
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    Ok(Dataset {
        exercises: payload.exercises,
        workouts: payload.workouts,
        plans: payload.plans,
        calendar_entries: payload.calendar_entries,
        settings: payload.settings,
    })
}
