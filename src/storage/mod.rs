//! Storage layer for LiftLog
//!
//! Provides the in-app data store: the single shared mutable resource that
//! owns the live dataset. The store exposes exactly two operations, read-all
//! and replace-all, and guarantees that replace-all is indivisible from the
//! perspective of readers. The restore orchestrator's apply step relies on
//! that guarantee for its all-or-nothing semantics.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic, write_text_atomic};

use std::sync::RwLock;

use crate::config::paths::LiftlogPaths;
use crate::error::{LiftlogError, LiftlogResult};
use crate::models::Dataset;

/// The in-app data store contract
///
/// Implementations must make `replace_all_collections` all-or-nothing: after
/// a failed replace, `get_all_collections` returns the prior dataset
/// unchanged, and no reader ever observes a partially-applied state.
pub trait DataStore: Send + Sync {
    /// Read the entire dataset
    fn get_all_collections(&self) -> LiftlogResult<Dataset>;

    /// Replace the entire dataset indivisibly
    fn replace_all_collections(&self, dataset: Dataset) -> LiftlogResult<()>;
}

/// File-backed data store
///
/// The whole dataset lives in a single JSON file, so a replace is one atomic
/// temp-write-and-rename: the file either holds the complete new dataset or
/// the complete old one.
pub struct JsonStore {
    paths: LiftlogPaths,
}

impl JsonStore {
    /// Create a store over the given paths
    pub fn new(paths: LiftlogPaths) -> Self {
        Self { paths }
    }

    /// Write an initial empty dataset if none exists yet
    pub fn initialize(&self) -> LiftlogResult<()> {
        self.paths.ensure_directories()?;
        if !self.paths.dataset_file().exists() {
            write_json_atomic(self.paths.dataset_file(), &Dataset::default())?;
        }
        Ok(())
    }
}

impl DataStore for JsonStore {
    fn get_all_collections(&self) -> LiftlogResult<Dataset> {
        read_json(self.paths.dataset_file())
    }

    fn replace_all_collections(&self, dataset: Dataset) -> LiftlogResult<()> {
        self.paths.ensure_directories()?;
        write_json_atomic(self.paths.dataset_file(), &dataset)
    }
}

/// In-memory data store
///
/// Used by hosts that keep the dataset resident (the mobile shell) and by
/// tests. Replace swaps the dataset under a single write lock.
#[derive(Default)]
pub struct MemoryStore {
    dataset: RwLock<Dataset>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a dataset
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: RwLock::new(dataset),
        }
    }
}

impl DataStore for MemoryStore {
    fn get_all_collections(&self) -> LiftlogResult<Dataset> {
        let guard = self
            .dataset
            .read()
            .map_err(|_| LiftlogError::Storage("Dataset lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn replace_all_collections(&self, dataset: Dataset) -> LiftlogResult<()> {
        let mut guard = self
            .dataset
            .write()
            .map_err(|_| LiftlogError::Storage("Dataset lock poisoned".into()))?;
        *guard = dataset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, MuscleGroup, Workout};
    use tempfile::TempDir;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::default();
        dataset
            .exercises
            .push(Exercise::new("Squat", MuscleGroup::Legs));
        dataset.workouts.push(Workout::new("Leg Day"));
        dataset
    }

    #[test]
    fn test_json_store_initialize() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LiftlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::new(paths.clone());

        store.initialize().unwrap();
        assert!(paths.dataset_file().exists());

        let dataset = store.get_all_collections().unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_json_store_replace_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LiftlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::new(paths);

        let dataset = sample_dataset();
        store.replace_all_collections(dataset.clone()).unwrap();

        let loaded = store.get_all_collections().unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_json_store_empty_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LiftlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::new(paths);

        // No file on disk yet
        let dataset = store.get_all_collections().unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_json_store_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LiftlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::new(paths.clone());

        store.replace_all_collections(sample_dataset()).unwrap();

        let temp_path = paths.dataset_file().with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_memory_store_replace_and_read() {
        let store = MemoryStore::new();
        assert!(store.get_all_collections().unwrap().is_empty());

        let dataset = sample_dataset();
        store.replace_all_collections(dataset.clone()).unwrap();
        assert_eq!(store.get_all_collections().unwrap(), dataset);
    }

    #[test]
    fn test_memory_store_with_dataset() {
        let dataset = sample_dataset();
        let store = MemoryStore::with_dataset(dataset.clone());
        assert_eq!(store.get_all_collections().unwrap(), dataset);
    }
}
