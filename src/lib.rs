//! budget-tracker - Income-driven category budgeting
//!
//! This library splits a monthly income across a catalog of spending
//! categories and keeps the resulting budgets as named profiles on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the persisted configuration record
//! - `error`: Custom error types
//! - `models`: Money, categories, budgets and profiles
//! - `storage`: JSON record storage and the profile store
//! - `services`: Budget allocation, session bootstrap and legacy import
//! - `export`: CSV, JSON and YAML export
//! - `display`: Plain-text tables for terminal output
//! - `cli`: Command handlers for the `budget-tracker` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::TrackerPaths;
//! use budget_tracker::services::start_session;
//! use budget_tracker::storage::ProfileStore;
//!
//! let mut store = ProfileStore::open(TrackerPaths::new()?)?;
//! start_session(&mut store)?;
//! println!("{}", store.get_active_profile()?.budget);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// Logs go to stderr. `RUST_LOG` overrides the default `budget_tracker=info`
/// filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budget_tracker=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
