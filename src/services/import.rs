//! Legacy CSV import
//!
//! Reads the flat `Category,Name,Cost per Month` budget sheets used before
//! profiles existed and turns them into a `Budget`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};
use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};

/// Header a legacy sheet must carry, in order
pub const LEGACY_HEADER: [&str; 3] = ["Category", "Name", "Cost per Month"];

const INCOME_CATEGORY: &str = "Income";
const INCOME_NAME: &str = "Monthly Income";

/// Clean a legacy cost cell
///
/// `$` and `,` are stripped, an empty cell counts as zero, and the value is
/// rounded to cents.
pub fn clean_legacy_cost(cell: &str) -> BudgetResult<Money> {
    let cleaned: String = cell.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(Money::zero());
    }

    Money::parse(&cleaned)
        .map_err(|e| BudgetError::Validation(format!("Invalid cost '{}': {}", cell.trim(), e)))
}

/// Import a legacy sheet from a file
pub fn import_legacy_csv_file(path: &Path) -> BudgetResult<Budget> {
    let file = File::open(path).map_err(|e| {
        BudgetError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let budget = import_legacy_csv(file)?;
    info!(path = %path.display(), rows = budget.len(), "legacy budget imported");
    Ok(budget)
}

/// Import a legacy sheet from any reader
///
/// The `Income` / `Monthly Income` row becomes the budget income; every other
/// row becomes a line item. Categories come from the default catalog.
pub fn import_legacy_csv<R: Read>(input: R) -> BudgetResult<Budget> {
    let mut reader = Reader::from_reader(input);

    let headers = reader.headers()?.clone();
    check_header(&headers)?;

    let mut income = None;
    let mut names = Vec::new();
    let mut costs = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let category = record.get(0).map(str::trim).unwrap_or("");
        let name = record.get(1).map(str::trim).unwrap_or("");
        let cost = clean_legacy_cost(record.get(2).unwrap_or("")).map_err(|e| {
            BudgetError::Validation(format!("Row {}: {}", row_idx + 1, e))
        })?;

        if category == INCOME_CATEGORY && name == INCOME_NAME {
            income.get_or_insert(cost);
            continue;
        }

        debug!(row = row_idx + 1, category, name, %cost, "legacy row read");
        names.push(name.to_string());
        costs.push(cost);
    }

    let income = income.ok_or_else(|| {
        BudgetError::Validation("No Income row found in the budget sheet".to_string())
    })?;

    Budget::from_rows(income, names, costs)
}

fn check_header(headers: &StringRecord) -> BudgetResult<()> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    if found != LEGACY_HEADER {
        return Err(BudgetError::Validation(format!(
            "Expected columns {:?}, but got {:?}",
            LEGACY_HEADER, found
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DEFAULT_SHEET: &str = "\
Category,Name,Cost per Month
Income,Monthly Income,2000.00
Housing,Rent,1000.00
Utilities,Utilities,100.00
Insurance,Auto,100.00
Food & Essentials,Groceries,300.00
";

    #[test]
    fn test_import_default_sheet() {
        let budget = import_legacy_csv(DEFAULT_SHEET.as_bytes()).unwrap();

        assert_eq!(budget.income(), Money::from_cents(200000));
        assert_eq!(budget.names(), ["Rent", "Utilities", "Auto", "Groceries"]);
        assert_eq!(budget.get_total(), Money::from_cents(150000));
        assert_eq!(budget.categories().len(), 13);
    }

    #[test]
    fn test_income_formats() {
        let cases = [
            ("5300", 530000),
            ("5300.123", 530012),
            ("5300.", 530000),
            ("\"$5,300.00\"", 530000),
            ("100000.00", 10000000),
            ("\"$100,000.50\"", 10000050),
        ];

        for (cell, cents) in cases {
            let sheet = format!(
                "Category,Name,Cost per Month\nIncome,Monthly Income,{}\nHousing,Rent,1800.00\n",
                cell
            );
            let budget = import_legacy_csv(sheet.as_bytes()).unwrap();
            assert_eq!(budget.income(), Money::from_cents(cents), "cell {}", cell);
        }
    }

    #[test]
    fn test_wrong_header_is_rejected() {
        let sheet = "WrongColumn1,WrongColumn2,Cost\nIncome,Monthly Income,2000\n";
        let err = import_legacy_csv(sheet.as_bytes()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_cells_are_trimmed_and_empty_cost_is_zero() {
        let sheet = "Category , Name ,Cost per Month\n Income , Monthly Income , 900 \n Food ,  Snacks  ,\n";
        let budget = import_legacy_csv(sheet.as_bytes()).unwrap();

        assert_eq!(budget.income(), Money::from_cents(90000));
        assert_eq!(budget.names(), ["Snacks"]);
        assert_eq!(budget.costs(), [Money::zero()]);
    }

    #[test]
    fn test_missing_income_row_is_rejected() {
        let sheet = "Category,Name,Cost per Month\nHousing,Rent,1000\n";
        assert!(import_legacy_csv(sheet.as_bytes()).unwrap_err().is_validation());
    }

    #[test]
    fn test_non_numeric_cost_is_rejected() {
        let sheet = "Category,Name,Cost per Month\nIncome,Monthly Income,100\nHousing,Rent,lots\n";
        let err = import_legacy_csv(sheet.as_bytes()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Row 2"));
    }

    #[test]
    fn test_import_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.csv");
        fs::write(&path, DEFAULT_SHEET).unwrap();

        let budget = import_legacy_csv_file(&path).unwrap();
        assert_eq!(budget.len(), 4);

        let missing = temp_dir.path().join("missing.csv");
        assert!(matches!(
            import_legacy_csv_file(&missing).unwrap_err(),
            BudgetError::Io(_)
        ));
    }
}
