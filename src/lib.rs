//! LiftLog - local-data core for a fitness-tracking application
//!
//! This library owns the user's local dataset (exercises, workouts, plans,
//! calendar entries, settings) and the backup/restore subsystem that
//! serializes the whole dataset to a single portable file and restores it
//! through a polymorphic storage bridge.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (exercises, workouts, plans, calendar)
//! - `storage`: The in-app data store (read-all / indivisible replace-all)
//! - `bridge`: The host storage capability set and its fallback
//! - `backup`: Codec, orchestrators, and the one-shot result channel
//! - `oplog`: Append-only log of backup/restore outcomes
//! - `cli`: Command handlers for the `liftlog` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use liftlog::backup::BackupOrchestrator;
//! use liftlog::bridge::FsBridge;
//! use liftlog::storage::MemoryStore;
//!
//! let bridge = Arc::new(FsBridge::new().with_export_dir("/backups"));
//! let store = Arc::new(MemoryStore::new());
//! let outcome = BackupOrchestrator::new(bridge, store).run();
//! ```

pub mod backup;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod oplog;
pub mod storage;

pub use error::LiftlogError;
