//! Service layer for budget-tracker
//!
//! Business logic on top of the models and the profile store: budget
//! allocation, session bootstrap, and legacy import.

pub mod allocator;
pub mod import;
pub mod session;

pub use allocator::{allocate, Allocation};
pub use import::{import_legacy_csv, import_legacy_csv_file};
pub use session::start_session;
