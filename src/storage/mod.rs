//! Storage layer for budget-tracker
//!
//! Provides JSON record storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod profiles;

pub use file_io::{read_json_required, write_json_atomic};
pub use profiles::{ProfileEntry, ProfileEvent, ProfileStore};
