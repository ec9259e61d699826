//! Display formatting for terminal output
//!
//! Provides utilities for formatting profiles and budgets as plain-text
//! tables.

pub mod budget;
pub mod profile;

pub use budget::{format_budget_table, format_category_list};
pub use profile::{format_profile_details, format_profile_list};
