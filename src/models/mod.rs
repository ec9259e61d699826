//! Core data models for budget-tracker
//!
//! This module contains the data structures of the budgeting domain: money,
//! the category catalog, budgets and the profiles that own them.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod profile;

pub use budget::{Budget, BudgetRecord, Household};
pub use category::{Category, DefaultCategory, Expense};
pub use ids::ProfileId;
pub use money::Money;
pub use profile::{Profile, ProfileRecord, DEFAULT_PROFILE_NAME};
