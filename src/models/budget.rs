//! Budget model
//!
//! A budget is the income-derived list of expense rows for a profile. Rows are
//! kept as two positionally aligned lists (`names`, `costs`) alongside the
//! categories and weights they were derived from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::{default_categories, validate_category_name, Category};
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};
use crate::services::allocator;

/// Household attributes that drive expense selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    #[serde(default)]
    pub is_home_owner: bool,

    #[serde(default = "default_vehicle_owner")]
    pub is_vehicle_owner: bool,
}

fn default_vehicle_owner() -> bool {
    true
}

impl Default for Household {
    fn default() -> Self {
        Self {
            is_home_owner: false,
            is_vehicle_owner: default_vehicle_owner(),
        }
    }
}

/// On-disk shape of a budget
///
/// Every field is optional so that records written before a field existed
/// still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    #[serde(default)]
    pub income: Money,

    #[serde(default)]
    pub is_home_owner: bool,

    #[serde(default = "default_vehicle_owner")]
    pub is_vehicle_owner: bool,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default)]
    pub costs: Vec<Money>,

    #[serde(default)]
    pub budget_weights: BTreeMap<String, f64>,
}

/// An income-derived, editable budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord", into = "BudgetRecord")]
pub struct Budget {
    income: Money,
    household: Household,
    categories: Vec<Category>,
    names: Vec<String>,
    costs: Vec<Money>,
    budget_weights: BTreeMap<String, f64>,
}

impl Budget {
    /// Create a budget from the default catalog and assemble its rows
    pub fn new(income: Money, household: Household) -> Self {
        Self::with_categories(income, household, default_categories())
    }

    /// Create a budget from custom categories and assemble its rows
    pub fn with_categories(income: Money, household: Household, categories: Vec<Category>) -> Self {
        let budget_weights = weights_of(&categories);
        let mut budget = Self {
            income,
            household,
            categories,
            names: Vec::new(),
            costs: Vec::new(),
            budget_weights,
        };
        budget.reassemble();
        budget
    }

    /// Create a budget from explicit rows without running the allocator
    pub fn from_rows(income: Money, names: Vec<String>, costs: Vec<Money>) -> BudgetResult<Self> {
        if names.len() != costs.len() {
            return Err(BudgetError::Validation(format!(
                "Budget has {} names but {} costs",
                names.len(),
                costs.len()
            )));
        }

        if let Some(cost) = costs.iter().find(|c| c.is_negative()) {
            return Err(BudgetError::Validation(format!(
                "Budget costs cannot be negative, got {}",
                cost
            )));
        }

        let categories = default_categories();
        Ok(Self {
            income,
            household: Household::default(),
            budget_weights: weights_of(&categories),
            categories,
            names,
            costs,
        })
    }

    /// Convert a stored record, filling in defaults for missing parts
    pub fn from_record(record: BudgetRecord) -> BudgetResult<Self> {
        Self::try_from(record)
    }

    /// Snapshot this budget as a storable record
    pub fn to_record(&self) -> BudgetRecord {
        BudgetRecord::from(self.clone())
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn household(&self) -> Household {
        self.household
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn costs(&self) -> &[Money] {
        &self.costs
    }

    pub fn budget_weights(&self) -> &BTreeMap<String, f64> {
        &self.budget_weights
    }

    /// Number of expense rows
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(name, cost)` rows in order
    pub fn line_items(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.costs.iter().copied())
    }

    /// Sum of all costs
    pub fn get_total(&self) -> Money {
        self.costs.iter().sum()
    }

    /// Each cost as a percentage of the total
    ///
    /// All zeros when the total is zero.
    pub fn get_category_percentages(&self) -> Vec<f64> {
        let total = self.get_total();
        if total.is_zero() {
            return vec![0.0; self.costs.len()];
        }

        let total = total.as_f64();
        self.costs
            .iter()
            .map(|cost| cost.as_f64() / total * 100.0)
            .collect()
    }

    /// Change the income without touching existing rows
    pub fn set_income(&mut self, income: Money) -> BudgetResult<()> {
        if income.is_negative() {
            return Err(BudgetError::Validation(
                "Income cannot be negative".to_string(),
            ));
        }
        self.income = income;
        Ok(())
    }

    /// Re-run the allocator over the current income and categories
    ///
    /// Discards any manual edits to names and costs.
    pub fn reassemble(&mut self) {
        let allocation = allocator::allocate(self.income, self.household, &self.categories);
        self.names = allocation.names;
        self.costs = allocation.costs;
    }

    /// Change the household attributes and reassemble
    pub fn reassemble_with(&mut self, household: Household) {
        self.household = household;
        self.reassemble();
    }

    /// Rename the expense in `row`
    pub fn rename_expense(&mut self, row: usize, name: &str) -> BudgetResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation(
                "Expense name cannot be empty".to_string(),
            ));
        }

        let slot = self
            .names
            .get_mut(row)
            .ok_or_else(|| BudgetError::row_not_found(row))?;
        *slot = name.to_string();
        Ok(())
    }

    /// Overwrite the cost in `row`
    pub fn set_cost(&mut self, row: usize, cost: Money) -> BudgetResult<()> {
        if cost.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Cost cannot be negative, got {}",
                cost
            )));
        }

        let slot = self
            .costs
            .get_mut(row)
            .ok_or_else(|| BudgetError::row_not_found(row))?;
        *slot = cost;
        Ok(())
    }

    /// Apply text typed into a money cell to the cost in `row`
    ///
    /// Rejected input leaves the previous cost in place.
    pub fn edit_cost(&mut self, row: usize, input: &str) -> BudgetResult<Money> {
        if row >= self.costs.len() {
            return Err(BudgetError::row_not_found(row));
        }

        let cost = Money::parse_input(input)
            .map_err(|e| BudgetError::Validation(format!("Invalid cost: {}", e)))?;
        self.set_cost(row, cost)?;
        Ok(cost)
    }

    /// Rename a category, carrying its weight over to the new name
    pub fn rename_category(&mut self, old: &str, new: &str) -> BudgetResult<()> {
        let new = new.trim();
        validate_category_name(new).map_err(|e| BudgetError::Validation(e.to_string()))?;

        if old != new && self.categories.iter().any(|c| c.name == new) {
            return Err(BudgetError::Validation(format!(
                "Category already exists: {}",
                new
            )));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == old)
            .ok_or_else(|| BudgetError::category_not_found(old))?;
        category.name = new.to_string();

        if let Some(weight) = self.budget_weights.remove(old) {
            self.budget_weights.insert(new.to_string(), weight);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows totalling {} of {} income",
            self.len(),
            self.get_total(),
            self.income
        )
    }
}

impl Default for BudgetRecord {
    fn default() -> Self {
        Self {
            income: Money::zero(),
            is_home_owner: false,
            is_vehicle_owner: default_vehicle_owner(),
            categories: Vec::new(),
            names: Vec::new(),
            costs: Vec::new(),
            budget_weights: BTreeMap::new(),
        }
    }
}

fn weights_of(categories: &[Category]) -> BTreeMap<String, f64> {
    categories
        .iter()
        .map(|c| (c.name.clone(), c.weight))
        .collect()
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = BudgetError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        if record.names.len() != record.costs.len() {
            return Err(BudgetError::Validation(format!(
                "Budget record has {} names but {} costs",
                record.names.len(),
                record.costs.len()
            )));
        }

        let categories = if record.categories.is_empty() {
            default_categories()
        } else {
            record.categories
        };

        let budget_weights = if record.budget_weights.is_empty() {
            weights_of(&categories)
        } else {
            record.budget_weights
        };

        Ok(Self {
            income: record.income,
            household: Household {
                is_home_owner: record.is_home_owner,
                is_vehicle_owner: record.is_vehicle_owner,
            },
            categories,
            names: record.names,
            costs: record.costs,
            budget_weights,
        })
    }
}

impl From<Budget> for BudgetRecord {
    fn from(budget: Budget) -> Self {
        Self {
            income: budget.income,
            is_home_owner: budget.household.is_home_owner,
            is_vehicle_owner: budget.household.is_vehicle_owner,
            categories: budget.categories,
            names: budget.names,
            costs: budget.costs,
            budget_weights: budget.budget_weights,
        }
    }
}

impl Default for Budget {
    /// An empty budget over the default catalog
    fn default() -> Self {
        let categories = default_categories();
        Self {
            income: Money::zero(),
            household: Household::default(),
            budget_weights: weights_of(&categories),
            categories,
            names: Vec::new(),
            costs: Vec::new(),
        }
    }
}
