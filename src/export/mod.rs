//! Export module for budget-tracker
//!
//! Exports a profile's budget in several formats:
//! - CSV: line items with their share of the total (spreadsheet-compatible)
//! - JSON: the full profile record
//! - YAML: the full profile record, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budget_csv, CSV_HEADER};
pub use json::export_profile_json;
pub use yaml::export_profile_yaml;
