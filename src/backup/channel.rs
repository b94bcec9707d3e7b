//! Operation result channel and handle
//!
//! Each orchestrator run produces exactly one terminal outcome, consumed
//! once by the initiating UI. Delivery is a one-shot rendezvous that
//! tolerates the initiating side having gone away before completion: a send
//! to a dropped receiver is a silent no-op, never an error. The
//! [`OperationHandle`] correlates a request with its eventual outcome;
//! invalidating the handle makes any late-arriving delivery a no-op, so a
//! dropped late callback can never be mistaken for success.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::oplog::OperationKind;

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Correlation token between a request and its eventual outcome
#[derive(Debug, Clone)]
pub struct OperationHandle {
    request_id: u64,
    kind: OperationKind,
    invalidated: Arc<AtomicBool>,
}

impl OperationHandle {
    /// Create a handle for a new request
    pub fn new(kind: OperationKind) -> Self {
        Self {
            request_id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            invalidated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Opaque request code
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Which operation kind this handle correlates
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Invalidate the handle; any outcome that arrives afterwards is dropped
    pub fn invalidate(&self) {
        self.invalidated.store(true, Ordering::SeqCst);
    }

    /// Whether the handle has been invalidated
    pub fn is_invalidated(&self) -> bool {
        self.invalidated.load(Ordering::SeqCst)
    }
}

/// Producing half of the one-shot outcome channel
pub struct OutcomeSender<T> {
    tx: SyncSender<T>,
    handle: OperationHandle,
}

impl<T> OutcomeSender<T> {
    /// Deliver the terminal outcome
    ///
    /// Consumes the sender: exactly one delivery per run. If the receiver is
    /// gone or the handle was invalidated the outcome is silently dropped.
    pub fn deliver(self, outcome: T) {
        if self.handle.is_invalidated() {
            return;
        }
        let _ = self.tx.send(outcome);
    }

    /// The handle this sender delivers for
    pub fn handle(&self) -> &OperationHandle {
        &self.handle
    }
}

/// Consuming half of the one-shot outcome channel
pub struct OutcomeReceiver<T> {
    rx: Receiver<T>,
    handle: OperationHandle,
}

impl<T> OutcomeReceiver<T> {
    /// The handle this receiver waits on
    pub fn handle(&self) -> &OperationHandle {
        &self.handle
    }

    /// Invalidate the handle so a late outcome is dropped instead of queued
    pub fn cancel(&self) {
        self.handle.invalidate();
    }

    /// Block until the outcome arrives
    ///
    /// Returns `None` if the producing side went away without delivering
    /// (or the handle was invalidated before delivery).
    pub fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Take the outcome if it has already arrived
    pub fn try_take(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Create a one-shot outcome channel for an operation
pub fn outcome_channel<T>(kind: OperationKind) -> (OutcomeSender<T>, OutcomeReceiver<T>) {
    let handle = OperationHandle::new(kind);
    // Capacity 1: the single terminal outcome never blocks the producer,
    // even when the initiating side never consumes it
    let (tx, rx) = sync_channel(1);
    (
        OutcomeSender {
            tx,
            handle: handle.clone(),
        },
        OutcomeReceiver { rx, handle },
    )
}

/// Run an operation on a worker thread, delivering its outcome one-shot
///
/// The bridge's blocking calls (pickers, OS dialogs, I/O) happen on the
/// worker thread; the initiating thread keeps its receiver and may drop it
/// at any time without consequence.
pub fn dispatch<T, F>(kind: OperationKind, operation: F) -> OutcomeReceiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = outcome_channel(kind);
    thread::spawn(move || {
        sender.deliver(operation());
    });
    receiver
}
