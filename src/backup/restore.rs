//! Restore orchestrator
//!
//! Drives the import flow: permission negotiation, file resolution, bridge
//! read, codec decode/validate, and the atomic dataset replacement. Restore
//! is all-or-nothing: the live dataset is untouched until a fully valid
//! dataset is in hand, and a failed apply leaves the prior dataset intact.
//!
//! State machine:
//! `Idle -> PermissionCheck -> FileSelect -> Reading -> Validating ->
//!  Applying -> Done`

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::bridge::{PermissionSession, StorageBridge};
use crate::oplog::{OperationEntry, OperationKind, OperationLog};
use crate::storage::DataStore;

use super::channel::{dispatch, OutcomeReceiver};
use super::codec::{self, ValidationError};
use super::export::enrich;
use super::BusyGuard;

/// Terminal result of one restore run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The dataset was replaced with the backup's contents
    Success {
        /// Collection-count summary of the restored dataset
        summary: String,
    },
    /// The user cancelled file selection; not an error
    Cancelled,
    /// Storage permission was denied
    PermissionDenied,
    /// The bridge read failed
    ReadFailed(String),
    /// The backup file failed validation; nothing was applied
    Invalid(ValidationError),
    /// The data store replace failed; the prior dataset is intact
    ApplyFailed(String),
    /// An import was already in flight; rejected, not queued
    Busy,
}

impl RestoreOutcome {
    /// Short label for the operation log
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Cancelled => "cancelled",
            Self::PermissionDenied => "permission_denied",
            Self::ReadFailed(_) => "read_failed",
            Self::Invalid(_) => "invalid",
            Self::ApplyFailed(_) => "apply_failed",
            Self::Busy => "busy",
        }
    }

    /// Detail text for the operation log, if any
    fn detail(&self) -> Option<String> {
        match self {
            Self::Success { summary } => Some(summary.clone()),
            Self::ReadFailed(reason) | Self::ApplyFailed(reason) => Some(reason.clone()),
            Self::Invalid(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

/// Drives restore (import) runs
pub struct RestoreOrchestrator {
    bridge: Arc<dyn StorageBridge>,
    store: Arc<dyn DataStore>,
    session: PermissionSession,
    oplog: Option<OperationLog>,
    in_flight: AtomicBool,
}

impl RestoreOrchestrator {
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

    /// Run one restore to completion on the calling thread
    ///
    /// Returns `Busy` synchronously, without touching the bridge, if a
    /// restore is already in flight.
    pub fn run(&self) -> RestoreOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.in_flight) else {
            return RestoreOutcome::Busy;
        };

        let outcome = self.drive();
        self.record(&outcome);
        outcome
    }

    /// Run one restore on a worker thread, delivering the outcome one-shot
    pub fn dispatch(self: Arc<Self>) -> OutcomeReceiver<RestoreOutcome> {
        dispatch(OperationKind::Import, move || self.run())
    }

    fn drive(&self) -> RestoreOutcome {
        // PermissionCheck
        if !self.session.ensure(self.bridge.as_ref()).allows_access() {
            return RestoreOutcome::PermissionDenied;
        }

        // FileSelect: None is user cancellation, not a failure
        let Some(location) = self.bridge.select_import_file() else {
            return RestoreOutcome::Cancelled;
        };

        // Reading
        let text = match self.bridge.read(&location) {
            Ok(text) => text,
            Err(e) => {
                self.session.note_failure(&e);
                return RestoreOutcome::ReadFailed(enrich(
                    e.to_string(),
                    self.bridge.last_error(),
                ));
            }
        };

        // Validating: decode is pure, the live dataset stays untouched on
        // any validation failure
        let dataset = match codec::decode(&text) {
            Ok(dataset) => dataset,
            Err(e) => return RestoreOutcome::Invalid(e),
        };

        // Applying: the store's replace is indivisible, so a failure here
        // leaves the prior dataset fully intact
        let summary = dataset.summary();
        match self.store.replace_all_collections(dataset) {
            Ok(()) => RestoreOutcome::Success { summary },
            Err(e) => RestoreOutcome::ApplyFailed(e.to_string()),
        }
    }

    fn record(&self, outcome: &RestoreOutcome) {
        if let Some(oplog) = &self.oplog {
            let entry =
                OperationEntry::new(OperationKind::Import, outcome.label(), outcome.detail());
            // Logging must never change the outcome
            let _ = oplog.log(&entry);
        }
    }
}
