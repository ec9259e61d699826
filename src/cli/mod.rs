//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the profile store.

pub mod budget;
pub mod profile;

pub use budget::{handle_budget_command, BudgetCommands, ExportFormat};
pub use profile::{handle_profile_command, ProfileCommands};
