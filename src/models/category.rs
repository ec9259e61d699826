//! Spending categories and the default category catalog
//!
//! A category carries a display color, a relative weight of income and a list
//! of named sub-expenses weighted within the category. The catalog below is
//! the fixed starting point every new budget is derived from.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named sub-expense, weighted relative to its owning category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,

    #[serde(default)]
    pub weight: f64,
}

impl Expense {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A spending category as stored inside a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within a budget
    pub name: String,

    /// Hex display color. Records written by older builds occasionally hold a
    /// number here; those load as `None` instead of failing the record.
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: Option<String>,

    /// Sub-expenses with intra-category weights
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Share of income allocated to this category
    #[serde(default)]
    pub weight: f64,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, color: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            color: Some(color.into()),
            expenses: Vec::new(),
            weight,
        }
    }

    /// Add a sub-expense
    pub fn with_expense(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.expenses.push(Expense::new(name, weight));
        self
    }

    /// The stored color, if it is a well-formed hex string
    pub fn hex_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| is_hex_color(c))
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_category_name(&self.name)?;

        if !(0.0..=1.0).contains(&self.weight) {
            return Err(CategoryValidationError::WeightOutOfRange(self.weight));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check a category name without building a category
pub fn validate_category_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.len() > 50 {
        return Err(CategoryValidationError::NameTooLong(name.len()));
    }

    Ok(())
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawColor>::deserialize(deserializer)? {
        Some(RawColor::Text(color)) => Some(color),
        Some(RawColor::Other(_)) | None => None,
    })
}

/// The default category catalog, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    HousingUtilities,
    Transportation,
    FoodEssentials,
    HealthInsurance,
    Education,
    FamilyChildren,
    Entertainment,
    GiftsDonations,
    Travel,
    Pets,
    SavingsInvestments,
    Shopping,
    Debt,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::HousingUtilities,
            Self::Transportation,
            Self::FoodEssentials,
            Self::HealthInsurance,
            Self::Education,
            Self::FamilyChildren,
            Self::Entertainment,
            Self::GiftsDonations,
            Self::Travel,
            Self::Pets,
            Self::SavingsInvestments,
            Self::Shopping,
            Self::Debt,
        ]
    }

    /// Look up a default category by its display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::HousingUtilities => "Housing & Utilities",
            Self::Transportation => "Transportation",
            Self::FoodEssentials => "Food & Essentials",
            Self::HealthInsurance => "Health & Insurance",
            Self::Education => "Education & Personal Development",
            Self::FamilyChildren => "Family & Children",
            Self::Entertainment => "Entertainment & Recreation",
            Self::GiftsDonations => "Gifts & Donations",
            Self::Travel => "Travel & Vacations",
            Self::Pets => "Pets",
            Self::SavingsInvestments => "Savings & Investments",
            Self::Shopping => "Shopping & Miscellaneous",
            Self::Debt => "Debt & Financial Obligations",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::HousingUtilities => "#116530",
            Self::Transportation => "#21B6A8",
            Self::FoodEssentials => "#A3EBB1",
            Self::HealthInsurance => "#18A558",
            Self::Education => "#145DA0",
            Self::FamilyChildren => "#2E8BC0",
            Self::Entertainment => "#B1D4E0",
            Self::GiftsDonations => "#189AB4",
            Self::Travel => "#75E6DA",
            Self::Pets => "#10564F",
            Self::SavingsInvestments => "#4A90A2",
            Self::Shopping => "#508AA8",
            Self::Debt => "#88C0D0",
        }
    }

    /// Default share of income
    pub fn weight(&self) -> f64 {
        match self {
            Self::HousingUtilities => 0.275,
            Self::Transportation => 0.125,
            Self::FoodEssentials => 0.125,
            Self::HealthInsurance => 0.15,
            Self::Education => 0.05,
            Self::FamilyChildren => 0.05,
            Self::Entertainment => 0.075,
            Self::GiftsDonations => 0.05,
            Self::Travel => 0.075,
            Self::Pets => 0.025,
            Self::SavingsInvestments => 0.125,
            Self::Shopping => 0.075,
            Self::Debt => 0.05,
        }
    }

    /// Catalog sub-expenses and their intra-category weights
    pub fn expenses(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::HousingUtilities => &[
                ("Rent", 0.4),
                ("Mortgage", 0.4),
                ("Homeowners Insurance", 0.05),
                ("Renters Insurance", 0.05),
                ("Property Taxes", 0.1),
                ("Home Maintenance & Repairs", 0.1),
                ("Electricity", 0.1),
                ("Water & Sewer", 0.05),
                ("Internet", 0.05),
                ("Cell Phone", 0.05),
            ],
            Self::Transportation => &[
                ("Car Payment", 0.4),
                ("Car Insurance", 0.2),
                ("Gas", 0.2),
                ("Public Transportation", 0.1),
                ("Vehicle Maintenance & Repairs", 0.1),
            ],
            Self::FoodEssentials => &[
                ("Groceries", 0.6),
                ("Dining Out", 0.2),
                ("Coffee Shops", 0.1),
                ("Fast Food", 0.05),
                ("Meal Delivery", 0.05),
            ],
            Self::HealthInsurance => &[
                ("Health Insurance", 0.4),
                ("Dental Insurance", 0.15),
                ("Vision Insurance", 0.1),
                ("Doctor Visits", 0.2),
                ("Prescription Medications", 0.15),
            ],
            Self::Education => &[
                ("Tuition", 0.3),
                ("Books & Supplies", 0.1),
                ("Online Courses", 0.1),
                ("Certifications", 0.1),
            ],
            Self::FamilyChildren => &[
                ("Childcare", 0.4),
                ("Babysitting", 0.2),
                ("School Lunches", 0.15),
                ("College Savings", 0.15),
                ("Extracurricular Activities", 0.1),
            ],
            Self::Entertainment => &[
                ("Hobbies", 0.3),
                ("Concerts", 0.2),
                ("Movies", 0.2),
                ("Gaming", 0.2),
                ("Theme Parks", 0.1),
            ],
            Self::GiftsDonations => &[
                ("Birthdays", 0.3),
                ("Holidays", 0.3),
                ("Weddings", 0.2),
                ("Charitable Donations", 0.1),
                ("Tithing", 0.1),
            ],
            Self::Travel => &[
                ("Flights", 0.4),
                ("Hotels", 0.3),
                ("Rental Cars", 0.1),
                ("Travel Insurance", 0.1),
                ("Tours", 0.1),
            ],
            Self::Pets => &[
                ("Pet Food", 0.5),
                ("Vet Visits", 0.3),
                ("Grooming", 0.1),
                ("Boarding", 0.1),
            ],
            Self::SavingsInvestments => &[
                ("Emergency Fund", 0.4),
                ("Retirement Contributions", 0.3),
                ("Stock Market Investments", 0.2),
                ("Real Estate Investments", 0.1),
            ],
            Self::Shopping => &[
                ("Clothing", 0.4),
                ("Shoes", 0.2),
                ("Beauty & Cosmetics", 0.2),
                ("Tech & Gadgets", 0.2),
            ],
            Self::Debt => &[
                ("Student Loan Payments", 0.2),
                ("Credit Card Payments", 0.2),
                ("Personal Loan Payments", 0.3),
                ("IRS Taxes", 0.2),
                ("Court Fees", 0.0),
            ],
        }
    }

    /// Create an owned Category from this default
    pub fn to_category(&self) -> Category {
        self.expenses().iter().fold(
            Category::new(self.name(), self.color(), self.weight()),
            |category, (name, weight)| category.with_expense(*name, *weight),
        )
    }
}

/// The full default catalog as owned categories
pub fn default_categories() -> Vec<Category> {
    DefaultCategory::all()
        .iter()
        .map(DefaultCategory::to_category)
        .collect()
}

/// Every color in the default catalog
pub fn catalog_colors() -> Vec<&'static str> {
    DefaultCategory::all().iter().map(|c| c.color()).collect()
}

/// Sum of all default category weights
///
/// The catalog overshoots 1.0. Budgets keep the weights as authored rather
/// than normalizing them.
pub fn catalog_weight_sum() -> f64 {
    DefaultCategory::all().iter().map(|c| c.weight()).sum()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    WeightOutOfRange(f64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::WeightOutOfRange(weight) => {
                write!(f, "Category weight must be between 0 and 1, got {}", weight)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let categories = default_categories();
        assert_eq!(categories.len(), 13);
        assert_eq!(categories[0].name, "Housing & Utilities");
        assert_eq!(categories[12].name, "Debt & Financial Obligations");

        let names: HashSet<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), categories.len(), "category names must be unique");

        for category in &categories {
            assert!(
                (4..=10).contains(&category.expenses.len()),
                "{} has {} expenses",
                category.name,
                category.expenses.len()
            );
            assert!(category.hex_color().is_some());
            assert!(category.validate().is_ok());
        }
    }

    #[test]
    fn test_catalog_weights_overshoot_one() {
        // Authored weights are kept as-is; this documents the overshoot.
        let sum = catalog_weight_sum();
        assert!((sum - 1.25).abs() < 1e-9, "weight sum was {}", sum);
        assert!(sum > 1.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            DefaultCategory::from_name("Pets"),
            Some(DefaultCategory::Pets)
        );
        assert_eq!(DefaultCategory::from_name("Unknown"), None);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#116530"));
        assert!(is_hex_color("#abc"));
        assert!(!is_hex_color("116530"));
        assert!(!is_hex_color("#11653Z"));
        assert!(!is_hex_color("#1165"));
    }

    #[test]
    fn test_non_string_color_loads_as_none() {
        let json = r#"{"name": "Pets", "color": 0.42, "expenses": [], "weight": 0.025}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Pets");
        assert_eq!(category.color, None);
        assert_eq!(category.hex_color(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let category: Category = serde_json::from_str(r#"{"name": "Custom"}"#).unwrap();
        assert_eq!(category.color, None);
        assert!(category.expenses.is_empty());
        assert_eq!(category.weight, 0.0);
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid", "#000000", 0.1);
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));

        category.name = "Valid".into();
        category.weight = 1.5;
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::WeightOutOfRange(_))
        ));
    }
}
