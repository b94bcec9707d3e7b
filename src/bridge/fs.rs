//! Filesystem fallback bridge
//!
//! Used when no native storage bridge is present (desktop CLI, tests). The
//! host supplies the export directory and import file up front, standing in
//! for the platform pickers; an unset selection plays the role of user
//! cancellation. Permission is always `NotRequired`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::storage::file_io::write_text_atomic;

use super::{BridgeError, Location, PermissionState, StorageBridge};

/// Fallback [`StorageBridge`] over the local filesystem
pub struct FsBridge {
    /// Pre-selected export directory, if the host provided one
    export_dir: Option<PathBuf>,
    /// Pre-selected import file, if the host provided one
    import_file: Option<PathBuf>,
    /// Diagnostic text from the most recent failure
    last_error: Mutex<Option<String>>,
}

impl FsBridge {
    /// Create a bridge with neither selection made (every picker "cancels")
    pub fn new() -> Self {
        Self {
            export_dir: None,
            import_file: None,
            last_error: Mutex::new(None),
        }
    }

    /// Pre-select the export directory
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Pre-select the import file
    pub fn with_import_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.import_file = Some(file.into());
        self
    }

    fn record_error(&self, message: String) {
        let mut guard = self.last_error.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(message);
    }

    fn clear_error(&self) {
        let mut guard = self.last_error.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

impl Default for FsBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBridge for FsBridge {
    fn is_available(&self) -> bool {
        // This is the fallback: no native bridge present
        false
    }

    fn check_permission(&self) -> PermissionState {
        PermissionState::NotRequired
    }

    fn request_permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn select_export_directory(&self) -> Option<Location> {
        self.export_dir
            .as_ref()
            .map(|dir| Location::new(dir.to_string_lossy()))
    }

    fn select_import_file(&self) -> Option<Location> {
        self.import_file
            .as_ref()
            .map(|file| Location::new(file.to_string_lossy()))
    }

    fn write(&self, text: &str, filename: &str, location: &Location) -> Result<(), BridgeError> {
        let path = Path::new(location.as_str()).join(filename);

        match write_text_atomic(&path, text) {
            Ok(()) => {
                self.clear_error();
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.record_error(message.clone());
                Err(BridgeError::Io(message))
            }
        }
    }

    fn read(&self, location: &Location) -> Result<String, BridgeError> {
        match fs::read_to_string(location.as_str()) {
            Ok(text) => {
                self.clear_error();
                Ok(text)
            }
            Err(e) => {
                let message = format!("Failed to read {}: {}", location, e);
                self.record_error(message.clone());
                Err(BridgeError::Io(message))
            }
        }
    }

    fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unconfigured_pickers_cancel() {
        let bridge = FsBridge::new();
        assert!(bridge.select_export_directory().is_none());
        assert!(bridge.select_import_file().is_none());
    }

    #[test]
    fn test_permission_not_required() {
        let bridge = FsBridge::new();
        assert_eq!(bridge.check_permission(), PermissionState::NotRequired);
        assert!(!bridge.is_available());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let bridge = FsBridge::new().with_export_dir(temp_dir.path());

        let dir = bridge.select_export_directory().unwrap();
        bridge.write("{\"ok\": true}", "backup.json", &dir).unwrap();

        let file = Location::new(
            temp_dir.path().join("backup.json").to_string_lossy(),
        );
        assert_eq!(bridge.read(&file).unwrap(), "{\"ok\": true}");
        assert!(bridge.last_error().is_none());
    }

    #[test]
    fn test_read_failure_records_last_error() {
        let bridge = FsBridge::new();
        let missing = Location::new("/nonexistent/path/backup.json");

        let err = bridge.read(&missing).unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
        assert!(bridge.last_error().is_some());
    }

    #[test]
    fn test_success_clears_last_error() {
        let temp_dir = TempDir::new().unwrap();
        let bridge = FsBridge::new();

        // Fail first to populate last_error
        let missing = Location::new("/nonexistent/path/backup.json");
        let _ = bridge.read(&missing);
        assert!(bridge.last_error().is_some());

        // A later success clears it (advisory state only; no caller
        // depends on this)
        let dir = Location::new(temp_dir.path().to_string_lossy());
        bridge.write("x", "f.json", &dir).unwrap();
        assert!(bridge.last_error().is_none());
    }

    #[test]
    fn test_failed_write_leaves_no_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let bridge = FsBridge::new();

        // Writing under a path that is a file, not a directory
        let file_path = temp_dir.path().join("not-a-dir");
        std::fs::write(&file_path, "x").unwrap();
        let bad_dir = Location::new(file_path.to_string_lossy());

        let result = bridge.write("payload", "backup.json", &bad_dir);
        assert!(result.is_err());
        assert!(!file_path.join("backup.json").exists());
    }
}
