//! Profile model
//!
//! A profile is a named budget with its own income. Each profile is stored as
//! its own record, keyed by id.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::{Budget, BudgetRecord, Household};
use super::category::catalog_colors;
use super::ids::ProfileId;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Name given to profiles created without one
pub const DEFAULT_PROFILE_NAME: &str = "Default Profile";

fn default_profile_name() -> String {
    DEFAULT_PROFILE_NAME.to_string()
}

/// On-disk shape of a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub profile_id: Option<ProfileId>,

    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    #[serde(default)]
    pub income: Money,

    #[serde(default)]
    pub budget: Option<BudgetRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user profile with a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub income: Money,
    pub budget: Budget,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create a new profile whose budget is assembled from `income`
    pub fn new(name: impl Into<String>, income: Money) -> Self {
        Self::with_budget(name, income, Budget::new(income, Household::default()))
    }

    /// Create a new profile around an existing budget
    pub fn with_budget(name: impl Into<String>, income: Money, budget: Budget) -> Self {
        Self {
            id: ProfileId::new(),
            name: name.into(),
            income,
            budget,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// Convert a stored record, filling in defaults for missing parts
    pub fn from_record(record: ProfileRecord) -> BudgetResult<Self> {
        Self::try_from(record)
    }

    /// Snapshot this profile as a storable record
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord::from(self.clone())
    }

    /// Rename the profile
    pub fn set_name(&mut self, name: &str) -> BudgetResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation(
                "Profile name cannot be empty".to_string(),
            ));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Change the profile income
    ///
    /// The budget rows are left as they are; call `Budget::reassemble` to
    /// derive new rows from the new income.
    pub fn set_income(&mut self, income: Money) -> BudgetResult<()> {
        self.budget.set_income(income)?;
        self.income = income;
        Ok(())
    }

    /// Display color for the named category
    ///
    /// Falls back to a random catalog color when the category is missing or
    /// its stored color is not a hex string.
    pub fn get_category_color(&self, category_name: &str) -> String {
        self.get_category_color_with(category_name, &mut rand::thread_rng())
    }

    /// `get_category_color` with a caller-supplied random source
    pub fn get_category_color_with<R: Rng + ?Sized>(&self, category_name: &str, rng: &mut R) -> String {
        let category = self
            .budget
            .categories()
            .iter()
            .find(|c| c.name == category_name);

        if let Some(color) = category.and_then(|c| c.hex_color()) {
            return color.to_string();
        }

        if category.is_some() {
            tracing::warn!(
                category = category_name,
                "stored category color is not a hex string, using a fallback"
            );
        }

        catalog_colors()
            .choose(rng)
            .copied()
            .unwrap_or("#000000")
            .to_string()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id.short())
    }
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = BudgetError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let budget = match record.budget {
            Some(budget) => Budget::from_record(budget)?,
            None => Budget::default(),
        };

        Ok(Self {
            id: record.profile_id.unwrap_or_default(),
            name: record.profile_name,
            income: record.income,
            budget,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl From<Profile> for ProfileRecord {
    fn from(profile: Profile) -> Self {
        Self {
            profile_id: Some(profile.id),
            profile_name: profile.name,
            income: profile.income,
            budget: Some(profile.budget.into()),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
