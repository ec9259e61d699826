//! Configuration module for budget-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Persisted default profile and bootstrap income

pub mod configuration;
pub mod paths;

pub use configuration::Configuration;
pub use paths::TrackerPaths;
