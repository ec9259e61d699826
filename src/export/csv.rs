//! CSV Export functionality
//!
//! Exports a budget's line items to CSV format.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// Header row of a budget export
pub const CSV_HEADER: [&str; 3] = ["Name", "Cost per Month", "Percent"];

/// Export budget line items to CSV
///
/// One row per line item, with its percentage of the budget total.
pub fn export_budget_csv<W: Write>(budget: &Budget, writer: W) -> BudgetResult<()> {
    let export_err = |e: csv::Error| BudgetError::Export(e.to_string());

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER).map_err(export_err)?;

    let percentages = budget.get_category_percentages();
    for ((name, cost), percent) in budget.line_items().zip(percentages) {
        csv_writer.write_record([
            name.to_string(),
            format!("{:.2}", cost.as_f64()),
            format!("{:.2}", percent),
        ])
        .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
