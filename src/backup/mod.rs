//! Backup and restore subsystem
//!
//! Serializes the entire local dataset to a single portable file through the
//! storage bridge, and restores it later, without ever leaving the
//! application in a half-migrated state.
//!
//! # Architecture
//!
//! - [`codec`]: versioned payload encode/decode with structural validation.
//! - [`channel`]: one-shot outcome delivery decoupled from the initiating
//!   UI's lifecycle, correlated by an [`channel::OperationHandle`].
//! - [`export`]: the backup orchestrator (permission, directory selection,
//!   encode, write).
//! - [`restore`]: the restore orchestrator (permission, file selection,
//!   read, validate, atomic apply).
//!
//! One operation per kind is in flight at a time; a second request of the
//! same kind is rejected synchronously with a `Busy` outcome, never queued.

pub mod channel;
pub mod codec;
pub mod export;
pub mod restore;

pub use channel::{outcome_channel, OperationHandle, OutcomeReceiver, OutcomeSender};
pub use codec::{decode, encode, ValidationError, SCHEMA_VERSION};
pub use export::{BackupOrchestrator, ExportOutcome};
pub use restore::{RestoreOrchestrator, RestoreOutcome};

use std::sync::atomic::{AtomicBool, Ordering};

/// RAII guard marking one operation of a kind in flight
///
/// Acquired at the top of an orchestrator run and released on drop, so every
/// exit path (success, failure, panic) clears the busy flag.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Try to mark the operation in flight; `None` when one already is
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
