//! Custom error types for LiftLog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for LiftLog operations
#[derive(Error, Debug)]
pub enum LiftlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Storage bridge errors
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// Backup/restore errors
    #[error("Backup error: {0}")]
    Backup(String),
}

impl LiftlogError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LiftlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LiftlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for LiftLog operations
pub type LiftlogResult<T> = Result<T, LiftlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LiftlogError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_predicate() {
        let err = LiftlogError::Validation("bad name".into());
        assert!(err.is_validation());
        assert!(!err.is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let liftlog_err: LiftlogError = io_err.into();
        assert!(matches!(liftlog_err, LiftlogError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let liftlog_err: LiftlogError = json_err.into();
        assert!(matches!(liftlog_err, LiftlogError::Json(_)));
    }
}
