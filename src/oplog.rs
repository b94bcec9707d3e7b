//! Operation log for backup and restore runs
//!
//! Records every terminal outcome (success or failure) in an append-only,
//! line-delimited JSON (JSONL) log. Each line is one complete entry, flushed
//! immediately. This is where invariant violations land as defects.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LiftlogError, LiftlogResult};

/// Which orchestrator produced the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Backup (export) run
    Export,
    /// Restore (import) run
    Import,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Export => write!(f, "export"),
            Self::Import => write!(f, "import"),
        }
    }
}

/// One logged terminal outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntry {
    /// When the operation terminated
    pub timestamp: DateTime<Utc>,
    /// Export or import
    pub operation: OperationKind,
    /// Short outcome label ("success", "cancelled", "write_failed", ...)
    pub outcome: String,
    /// Free-form detail (location, summary, or failure reason)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl OperationEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        operation: OperationKind,
        outcome: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            outcome: outcome.into(),
            detail,
        }
    }
}

/// Handles writing operation entries to the log file
pub struct OperationLog {
    /// Path to the log file
    log_path: PathBuf,
}

impl OperationLog {
    /// Create a new OperationLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an entry
    ///
    /// Appends the entry as a JSON line and flushes immediately.
    pub fn log(&self, entry: &OperationEntry) -> LiftlogResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LiftlogError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LiftlogError::Io(format!("Failed to open operation log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| LiftlogError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LiftlogError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| LiftlogError::Io(format!("Failed to flush operation log: {}", e)))?;

        Ok(())
    }

    /// Read all entries in chronological order (oldest first)
    pub fn read_all(&self) -> LiftlogResult<Vec<OperationEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LiftlogError::Io(format!("Failed to open operation log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                LiftlogError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: OperationEntry = serde_json::from_str(&line).map_err(|e| {
                LiftlogError::Json(format!(
                    "Failed to parse log entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> LiftlogResult<Vec<OperationEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
