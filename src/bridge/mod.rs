//! Storage bridge adapter
//!
//! The host platform owns all durable-storage interaction: permission
//! dialogs, directory/file pickers, and the actual reads and writes. This
//! module defines that capability set as a trait so the orchestrators are
//! polymorphic over the native bridge and the fallback implementation, and
//! confines every platform I/O side effect behind it.
//!
//! Calls that wait on user interaction (`request_permission`,
//! `select_export_directory`, `select_import_file`) block the calling
//! thread; orchestrators run them off the initiating thread when dispatched
//! through the result channel.

pub mod fs;

pub use fs::FsBridge;

use std::sync::Mutex;

use thiserror::Error;

/// Result of a storage permission query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// Not yet queried this session
    Unknown,
    /// The user granted storage access
    Granted,
    /// The user denied storage access
    Denied,
    /// The platform needs no permission for this storage path
    NotRequired,
}

impl PermissionState {
    /// True when a storage operation may proceed without asking the user
    pub fn allows_access(&self) -> bool {
        matches!(self, Self::Granted | Self::NotRequired)
    }
}

/// An opaque storage location token owned by the host platform
///
/// Either a directory token (export target) or a file token (import
/// source). The application never parses or constructs its internal
/// structure, only hands it back to the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Wrap a host-provided token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for handing back to the bridge and for display
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bridge read/write failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// Permission-class failure: the grant was revoked or expired.
    /// The session permission cache must be re-queried after this.
    #[error("storage permission revoked")]
    PermissionRevoked,

    /// Any other I/O failure, with the host's reason text
    #[error("{0}")]
    Io(String),
}

impl BridgeError {
    /// True for failures that should invalidate the cached permission state
    pub fn is_permission_class(&self) -> bool {
        matches!(self, Self::PermissionRevoked)
    }
}

/// The host storage capability set
///
/// One implementation wraps the native bridge (SAF pickers, OS permission
/// dialogs); [`FsBridge`] is the fallback with an equivalent contract.
/// Selected once at startup via `is_available`, not branched on per call.
pub trait StorageBridge: Send + Sync {
    /// Whether the native bridge is present on this host
    fn is_available(&self) -> bool;

    /// Pure status read; never blocks on user interaction
    fn check_permission(&self) -> PermissionState;

    /// May block pending an OS permission dialog; resolves to the
    /// post-dialog state (`Granted` or `Denied`)
    fn request_permission(&self) -> PermissionState;

    /// Let the user pick an export directory; `None` means the user
    /// cancelled, which is not a failure
    fn select_export_directory(&self) -> Option<Location>;

    /// Let the user pick a backup file to import; same cancellation
    /// semantics as [`select_export_directory`](Self::select_export_directory)
    fn select_import_file(&self) -> Option<Location>;

    /// Write payload text as `filename` under the given directory location
    fn write(&self, text: &str, filename: &str, location: &Location) -> Result<(), BridgeError>;

    /// Read the full text of the given file location
    fn read(&self, location: &Location) -> Result<String, BridgeError>;

    /// Diagnostic text from the most recent failure, if any
    ///
    /// Advisory only: queried after a failure to enrich the user-facing
    /// message, never used for control flow. The value may be stale.
    fn last_error(&self) -> Option<String>;
}

/// Session-scoped permission cache
///
/// Permission is queried lazily before the first storage operation of a
/// session and cached; a permission-class bridge failure invalidates the
/// cache so the next operation re-negotiates.
pub struct PermissionSession {
    cached: Mutex<Option<PermissionState>>,
}

impl PermissionSession {
    /// Create a fresh session with nothing cached
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Resolve the permission state, asking the user only when needed
    ///
    /// Returns the cached state when it already allows access. Otherwise
    /// checks the bridge status and, if that still does not allow access,
    /// escalates to `request_permission` (which may block on an OS dialog).
    /// The outcome is cached for the session.
    pub fn ensure(&self, bridge: &dyn StorageBridge) -> PermissionState {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(state) = *cached {
            if state.allows_access() {
                return state;
            }
        }

        let checked = bridge.check_permission();
        let resolved = if checked.allows_access() {
            checked
        } else {
            bridge.request_permission()
        };

        *cached = Some(resolved);
        resolved
    }

    /// Drop the cached state so the next operation re-queries
    pub fn invalidate(&self) {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    /// Invalidate the cache if the failure was permission-class
    pub fn note_failure(&self, error: &BridgeError) {
        if error.is_permission_class() {
            self.invalidate();
        }
    }
}

impl Default for PermissionSession {
    fn default() -> Self {
        Self::new()
    }
}
