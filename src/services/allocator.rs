//! Budget allocation
//!
//! Turns a monthly income and household attributes into concrete budget rows.
//! Each category receives `income × weight`, and a fixed, policy-selected
//! subset of its expenses splits that amount by intra-category weight.

use tracing::debug;

use crate::models::{Category, DefaultCategory, Household, Money};

/// Rows produced by an allocation, positionally aligned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    pub names: Vec<String>,
    pub costs: Vec<Money>,
}

impl Allocation {
    /// Total of all allocated rows
    pub fn total(&self) -> Money {
        self.costs.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Expenses instantiated for a category under the given household
///
/// Only five categories produce rows. The rest receive an allocated amount
/// that never surfaces as a line item.
pub fn selected_expenses(category_name: &str, household: Household) -> Vec<(&'static str, f64)> {
    let mut selected = Vec::new();

    match DefaultCategory::from_name(category_name) {
        Some(DefaultCategory::HousingUtilities) => {
            if household.is_home_owner {
                selected.extend([
                    ("Mortgage", 0.5),
                    ("Property Taxes", 0.2),
                    ("Homeowners Insurance", 0.1),
                    ("Home Maintenance & Repairs", 0.2),
                ]);
            } else {
                selected.extend([("Rent", 0.7), ("Renter's Insurance", 0.1)]);
            }

            // Utilities apply to every household
            selected.extend([("Electricity", 0.05), ("Internet", 0.05), ("Cell Phone", 0.05)]);
        }
        Some(DefaultCategory::Transportation) => {
            if household.is_vehicle_owner {
                selected.extend([("Car Payment", 0.5), ("Car Insurance", 0.2), ("Gas", 0.3)]);
            } else {
                selected.extend([("Public Transportation", 0.8), ("Ride-Sharing", 0.2)]);
            }
        }
        Some(DefaultCategory::Debt) => {
            selected.push(("Student Loan Payments", 1.0));
        }
        Some(DefaultCategory::SavingsInvestments) => {
            selected.extend([("Emergency Fund", 0.5), ("Retirement Contributions", 0.5)]);
        }
        Some(DefaultCategory::Shopping) => {
            selected.extend([
                ("Clothing", 0.4),
                ("Shoes", 0.2),
                ("Beauty & Cosmetics", 0.2),
                ("Tech & Gadgets", 0.2),
            ]);
        }
        _ => {}
    }

    selected
}

/// Allocate `income` across `categories`
///
/// Deterministic and free of side effects. Every cost is rounded to cents at
/// the moment it is computed.
pub fn allocate(income: Money, household: Household, categories: &[Category]) -> Allocation {
    let mut allocation = Allocation::default();

    for category in categories {
        let allocated = income.scale(category.weight);
        debug!(category = %category.name, %allocated, "allocated category budget");

        for (name, weight) in selected_expenses(&category.name, household) {
            allocation.names.push(name.to_string());
            allocation.costs.push(allocated.scale(weight));
        }
    }

    allocation
}
