//! Configuration and path management for LiftLog

pub mod paths;

pub use paths::LiftlogPaths;
