//! Backup orchestrator
//!
//! Drives the export flow: permission negotiation, directory resolution,
//! codec encode, bridge write, and a single user-visible result.
//!
//! State machine:
//! `Idle -> PermissionCheck -> DirectorySelect -> Encoding -> Writing -> Done`

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::Utc;

use crate::bridge::{Location, PermissionSession, StorageBridge};
use crate::oplog::{OperationEntry, OperationKind, OperationLog};
use crate::storage::DataStore;

use super::channel::{dispatch, OutcomeReceiver};
use super::{codec, BusyGuard};

/// Terminal result of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The backup file was written completely
    Success {
        /// Name of the written file
        filename: String,
        /// Directory the file was written into
        location: Location,
    },
    /// The user cancelled directory selection; not an error
    Cancelled,
    /// Storage permission was denied
    PermissionDenied,
    /// The bridge write (or the dataset read feeding it) failed
    WriteFailed(String),
    /// An export was already in flight; rejected, not queued
    Busy,
}

impl ExportOutcome {
    /// Short label for the operation log
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Cancelled => "cancelled",
            Self::PermissionDenied => "permission_denied",
            Self::WriteFailed(_) => "write_failed",
            Self::Busy => "busy",
        }
    }

    /// Detail text for the operation log, if any
    fn detail(&self) -> Option<String> {
        match self {
            Self::Success { filename, location } => {
                Some(format!("{} in {}", filename, location))
            }
            Self::WriteFailed(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}

/// Drives backup (export) runs
pub struct BackupOrchestrator {
    bridge: Arc<dyn StorageBridge>,
    store: Arc<dyn DataStore>,
    session: PermissionSession,
    oplog: Option<OperationLog>,
    in_flight: AtomicBool,
}

impl BackupOrchestrator {
    /// Create an orchestrator over a bridge and data store
    pub fn new(bridge: Arc<dyn StorageBridge>, store: Arc<dyn DataStore>) -> Self {
        Self {
            bridge,
            store,
            session: PermissionSession::new(),
            oplog: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Record terminal outcomes in an operation log
    pub fn with_operation_log(mut self, oplog: OperationLog) -> Self {
        self.oplog = Some(oplog);
        self
    }

    /// Run one export to completion on the calling thread
    ///
    /// Returns `Busy` synchronously, without touching the bridge, if an
    /// export is already in flight.
    pub fn run(&self) -> ExportOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.in_flight) else {
            return ExportOutcome::Busy;
        };

        let outcome = self.drive();
        self.record(&outcome);
        outcome
    }

    /// Run one export on a worker thread, delivering the outcome one-shot
    pub fn dispatch(self: Arc<Self>) -> OutcomeReceiver<ExportOutcome> {
        dispatch(OperationKind::Export, move || self.run())
    }

    fn drive(&self) -> ExportOutcome {
        // PermissionCheck
        if !self.session.ensure(self.bridge.as_ref()).allows_access() {
            return ExportOutcome::PermissionDenied;
        }

        // DirectorySelect: None is user cancellation, not a failure
        let Some(location) = self.bridge.select_export_directory() else {
            return ExportOutcome::Cancelled;
        };

        // Encoding. The dataset read is environmental and can fail; the
        // encode itself cannot.
        let dataset = match self.store.get_all_collections() {
            Ok(dataset) => dataset,
            Err(e) => {
                return ExportOutcome::WriteFailed(format!("Failed to read dataset: {}", e))
            }
        };
        let text = codec::encode(&dataset);
        let filename = default_filename();

        // Writing
        match self.bridge.write(&text, &filename, &location) {
            Ok(()) => ExportOutcome::Success { filename, location },
            Err(e) => {
                self.session.note_failure(&e);
                ExportOutcome::WriteFailed(enrich(e.to_string(), self.bridge.last_error()))
            }
        }
    }

    fn record(&self, outcome: &ExportOutcome) {
        if let Some(oplog) = &self.oplog {
            let entry =
                OperationEntry::new(OperationKind::Export, outcome.label(), outcome.detail());
            // Logging must never change the outcome
            let _ = oplog.log(&entry);
        }
    }
}

/// Timestamped default backup filename
fn default_filename() -> String {
    format!("liftlog-backup-{}.json", Utc::now().format("%Y%m%d-%H%M%S"))
}

/// Append the bridge's diagnostic text to a failure reason, if it adds anything
pub(super) fn enrich(reason: String, diagnostic: Option<String>) -> String {
    match diagnostic {
        Some(detail) if detail != reason => format!("{} ({})", reason, detail),
        _ => reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::testutil::MockBridge;
    use crate::bridge::{BridgeError, PermissionState};
    use crate::models::{Dataset, Exercise, MuscleGroup};
    use crate::storage::MemoryStore;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn orchestrator_with(
        bridge: Arc<MockBridge>,
        dataset: Dataset,
    ) -> BackupOrchestrator {
        let store = Arc::new(MemoryStore::with_dataset(dataset));
        BackupOrchestrator::new(bridge, store)
    }

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::default();
        dataset
            .exercises
            .push(Exercise::new("Squat", MuscleGroup::Legs));
        dataset
    }

    #[test]
    fn test_successful_export() {
        let bridge = Arc::new(MockBridge::new());
        let orchestrator = orchestrator_with(bridge.clone(), sample_dataset());

        let outcome = orchestrator.run();
        let ExportOutcome::Success { filename, location } = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert!(filename.starts_with("liftlog-backup-"));
        assert!(filename.ends_with(".json"));
        assert_eq!(location.as_str(), "mock://export-dir");

        // Written payload is decodable and carries the dataset
        let written = bridge.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        let decoded = codec::decode(&written[0].1).unwrap();
        assert_eq!(decoded.exercises.len(), 1);
    }

    #[test]
    fn test_cancelled_selection_means_no_write() {
        let bridge = Arc::new(MockBridge::new());
        *bridge.export_dir.lock().unwrap() = None;
        let orchestrator = orchestrator_with(bridge.clone(), sample_dataset());

        assert_eq!(orchestrator.run(), ExportOutcome::Cancelled);
        assert_eq!(bridge.write_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_permission_denied() {
        let bridge = Arc::new(MockBridge::new());
        *bridge.check_result.lock().unwrap() = PermissionState::Unknown;
        *bridge.request_result.lock().unwrap() = PermissionState::Denied;
        let orchestrator = orchestrator_with(bridge.clone(), sample_dataset());

        assert_eq!(orchestrator.run(), ExportOutcome::PermissionDenied);
        assert_eq!(bridge.select_dir_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_granted_permission_skips_request() {
        let bridge = Arc::new(MockBridge::new());
        *bridge.check_result.lock().unwrap() = PermissionState::Granted;
        let orchestrator = orchestrator_with(bridge.clone(), sample_dataset());

        assert!(matches!(orchestrator.run(), ExportOutcome::Success { .. }));
    }

    #[test]
    fn test_write_failure_enriched_with_diagnostic() {
        let bridge = Arc::new(MockBridge::new());
        *bridge.write_result.lock().unwrap() = Err(BridgeError::Io("write failed".into()));
        *bridge.diagnostic.lock().unwrap() = Some("EDQUOT: quota exceeded".into());
        let orchestrator = orchestrator_with(bridge, sample_dataset());

        let ExportOutcome::WriteFailed(reason) = orchestrator.run() else {
            panic!("expected write failure");
        };
        assert!(reason.contains("write failed"));
        assert!(reason.contains("EDQUOT"));
    }

    #[test]
    fn test_stale_diagnostic_not_used_as_failure_signal() {
        // A stale last_error alongside a successful write must not turn
        // the outcome into a failure
        let bridge = Arc::new(MockBridge::new());
        *bridge.diagnostic.lock().unwrap() = Some("stale error from earlier".into());
        let orchestrator = orchestrator_with(bridge, sample_dataset());

        assert!(matches!(orchestrator.run(), ExportOutcome::Success { .. }));
    }

    #[test]
    fn test_second_export_while_pending_is_busy() {
        let bridge = Arc::new(MockBridge::new());
        bridge.hold_select();
        let orchestrator = Arc::new(orchestrator_with(bridge.clone(), sample_dataset()));

        let background = orchestrator.clone().dispatch();

        // Wait until the first run is parked inside the picker
        while bridge.select_dir_calls.load(Ordering::SeqCst) == 0 {
            std::thread::sleep(Duration::from_millis(1));
        }

        // Rejected synchronously, without a second picker invocation
        assert_eq!(orchestrator.run(), ExportOutcome::Busy);
        assert_eq!(bridge.select_dir_calls.load(Ordering::SeqCst), 1);

        bridge.release_select();
        assert!(matches!(
            background.wait(),
            Some(ExportOutcome::Success { .. })
        ));
    }

    #[test]
    fn test_flag_clears_after_completion() {
        let bridge = Arc::new(MockBridge::new());
        let orchestrator = orchestrator_with(bridge, sample_dataset());

        assert!(matches!(orchestrator.run(), ExportOutcome::Success { .. }));
        // A second run after the first completed is not Busy
        assert!(matches!(orchestrator.run(), ExportOutcome::Success { .. }));
    }

    #[test]
    fn test_outcome_recorded_in_operation_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let oplog = OperationLog::new(temp_dir.path().join("operations.log"));

        let bridge = Arc::new(MockBridge::new());
        let orchestrator =
            orchestrator_with(bridge, sample_dataset()).with_operation_log(oplog);

        orchestrator.run();

        let oplog = OperationLog::new(temp_dir.path().join("operations.log"));
        let entries = oplog.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].outcome, "success");
        assert_eq!(entries[0].operation, OperationKind::Export);
    }

    #[test]
    fn test_enrich() {
        assert_eq!(enrich("a".into(), None), "a");
        assert_eq!(enrich("a".into(), Some("a".into())), "a");
        assert_eq!(enrich("a".into(), Some("b".into())), "a (b)");
    }
}
