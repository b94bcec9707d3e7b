//! Path management for LiftLog
//!
//! Provides XDG-compliant path resolution for the local dataset, the
//! operation log, and the default export directory.
//!
//! ## Path Resolution Order
//!
//! 1. `LIFTLOG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/liftlog` or `~/.config/liftlog`
//! 3. Windows: `%APPDATA%\liftlog`

use std::path::PathBuf;

use crate::error::LiftlogError;

/// Manages all paths used by LiftLog
#[derive(Debug, Clone)]
pub struct LiftlogPaths {
    /// Base directory for all LiftLog data
    base_dir: PathBuf,
}

impl LiftlogPaths {
    /// Create a new LiftlogPaths instance
    ///
    /// Path resolution:
    /// 1. `LIFTLOG_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/liftlog` or `~/.config/liftlog`
    /// 3. Windows: `%APPDATA%\liftlog`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LiftlogError> {
        let base_dir = if let Ok(custom) = std::env::var("LIFTLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LiftlogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/liftlog/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/liftlog/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (~/.config/liftlog/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the single-file dataset store
    pub fn dataset_file(&self) -> PathBuf {
        self.data_dir().join("dataset.json")
    }

    /// Get the path to the operation log
    pub fn operation_log(&self) -> PathBuf {
        self.base_dir.join("operations.log")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/liftlog/)
    /// - Data directory (~/.config/liftlog/data/)
    /// - Export directory (~/.config/liftlog/exports/)
    pub fn ensure_directories(&self) -> Result<(), LiftlogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LiftlogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LiftlogError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LiftlogError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if LiftLog has been initialized (dataset file exists)
    pub fn is_initialized(&self) -> bool {
        self.dataset_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LiftlogError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("liftlog"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LiftlogError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LiftlogError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("liftlog"))
}
