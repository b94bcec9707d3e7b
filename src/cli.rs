//! CLI command handlers
//!
//! Bridges clap argument parsing with the backup subsystem. This layer is
//! the stand-in "settings UI": it builds the bridge from its flags (the
//! flags play the role of the user's picker choices), runs an orchestrator,
//! and maps each terminal outcome to user-readable text. It never infers
//! state beyond the outcome value it receives.

use std::path::PathBuf;
use std::sync::Arc;

use crate::backup::{
    codec, BackupOrchestrator, ExportOutcome, RestoreOrchestrator, RestoreOutcome,
};
use crate::bridge::FsBridge;
use crate::config::paths::LiftlogPaths;
use crate::error::{LiftlogError, LiftlogResult};
use crate::oplog::OperationLog;
use crate::storage::{DataStore, JsonStore};

/// Initialize the data directory with an empty dataset
pub fn handle_init(paths: &LiftlogPaths) -> LiftlogResult<()> {
    let already = paths.is_initialized();
    let store = JsonStore::new(paths.clone());
    store.initialize()?;

    if already {
        println!("Already initialized: {}", paths.base_dir().display());
    } else {
        println!("Initialized LiftLog data in {}", paths.base_dir().display());
    }
    Ok(())
}

/// Show dataset and configuration status
pub fn handle_status(paths: &LiftlogPaths) -> LiftlogResult<()> {
    let store = JsonStore::new(paths.clone());
    let dataset = store.get_all_collections()?;

    println!("LiftLog Status");
    println!("==============");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Dataset: {}", dataset.summary());
    println!(
        "Initialized: {}",
        if paths.is_initialized() { "yes" } else { "no" }
    );
    Ok(())
}

/// Run a backup (export) to the given directory
pub fn handle_backup(paths: &LiftlogPaths, dir: Option<PathBuf>) -> LiftlogResult<()> {
    let export_dir = dir.unwrap_or_else(|| paths.export_dir());

    let bridge = Arc::new(FsBridge::new().with_export_dir(export_dir));
    let store: Arc<dyn DataStore> = Arc::new(JsonStore::new(paths.clone()));
    let orchestrator = BackupOrchestrator::new(bridge, store)
        .with_operation_log(OperationLog::new(paths.operation_log()));

    match orchestrator.run() {
        ExportOutcome::Success { filename, location } => {
            println!("Backup created: {}", filename);
            println!("Location: {}", location);
            Ok(())
        }
        // Cancellation is a non-error outcome: no error text, no failure exit
        ExportOutcome::Cancelled => Ok(()),
        ExportOutcome::PermissionDenied => Err(LiftlogError::Backup(
            "Storage permission was denied".into(),
        )),
        ExportOutcome::WriteFailed(reason) => Err(LiftlogError::Backup(format!(
            "Could not write the backup file: {}",
            reason
        ))),
        ExportOutcome::Busy => Err(LiftlogError::Backup(
            "A backup is already in progress".into(),
        )),
    }
}

/// Run a restore (import) from the given backup file
pub fn handle_restore(paths: &LiftlogPaths, file: PathBuf, force: bool) -> LiftlogResult<()> {
    if !force {
        // Validate and show what would be applied, but require --force for
        // the destructive overwrite
        let text = std::fs::read_to_string(&file)
            .map_err(|e| LiftlogError::Io(format!("Failed to read backup file: {}", e)))?;
        let dataset = codec::decode(&text)
            .map_err(|e| LiftlogError::Validation(e.to_string()))?;

        println!("Backup file: {}", file.display());
        println!("Contents: {}", dataset.summary());
        println!();
        println!("WARNING: restoring will overwrite ALL current data!");
        println!("To proceed, run again with --force:");
        println!("  liftlog restore {} --force", file.display());
        return Ok(());
    }

    let bridge = Arc::new(FsBridge::new().with_import_file(file));
    let store: Arc<dyn DataStore> = Arc::new(JsonStore::new(paths.clone()));
    let orchestrator = RestoreOrchestrator::new(bridge, store)
        .with_operation_log(OperationLog::new(paths.operation_log()));

    match orchestrator.run() {
        RestoreOutcome::Success { summary } => {
            println!("Restore complete!");
            println!("Restored: {}", summary);
            Ok(())
        }
        RestoreOutcome::Cancelled => Ok(()),
        RestoreOutcome::PermissionDenied => Err(LiftlogError::Backup(
            "Storage permission was denied".into(),
        )),
        RestoreOutcome::ReadFailed(reason) => Err(LiftlogError::Backup(format!(
            "Could not read the backup file: {}",
            reason
        ))),
        RestoreOutcome::Invalid(error) => Err(LiftlogError::Validation(format!(
            "Backup file is not usable: {}",
            error
        ))),
        RestoreOutcome::ApplyFailed(reason) => Err(LiftlogError::Backup(format!(
            "Restore failed while applying; your current data is unchanged: {}",
            reason
        ))),
        RestoreOutcome::Busy => Err(LiftlogError::Backup(
            "A restore is already in progress".into(),
        )),
    }
}

/// Validate a backup file without restoring it
pub fn handle_validate(file: PathBuf) -> LiftlogResult<()> {
    let text = std::fs::read_to_string(&file)
        .map_err(|e| LiftlogError::Io(format!("Failed to read backup file: {}", e)))?;

    match codec::decode(&text) {
        Ok(dataset) => {
            println!("Valid backup (reader schema version {})", codec::SCHEMA_VERSION);
            println!("Contents: {}", dataset.summary());
            Ok(())
        }
        Err(error) => Err(LiftlogError::Validation(error.to_string())),
    }
}

/// Show recent backup/restore operations from the log
pub fn handle_history(paths: &LiftlogPaths, count: usize) -> LiftlogResult<()> {
    let oplog = OperationLog::new(paths.operation_log());
    let entries = oplog.read_recent(count)?;

    if entries.is_empty() {
        println!("No backup or restore operations recorded yet.");
        return Ok(());
    }

    println!("Recent Operations");
    println!("=================");
    for entry in entries {
        let detail = entry
            .detail
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        println!(
            "  {} {:<7} {}{}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.operation.to_string(),
            entry.outcome,
            detail,
        );
    }
    Ok(())
}
