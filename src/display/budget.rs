//! Budget display formatting
//!
//! Formats budget line items and categories for terminal output.

use crate::models::{Budget, Money};

/// Format budget line items as a table with row numbers and percentages
pub fn format_budget_table(budget: &Budget) -> String {
    if budget.is_empty() {
        return "No budget line items.".to_string();
    }

    let name_width = budget
        .names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>14}  {:>8}\n",
        "#",
        "Name",
        "Cost per Month",
        "Percent",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->14}  {:->8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    let percentages = budget.get_category_percentages();
    for (row, ((name, cost), percent)) in budget.line_items().zip(percentages).enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>14}  {:>7.2}%\n",
            row,
            name,
            cost.to_string(),
            percent,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->14}  {:->8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>14}\n",
        "",
        "Total",
        budget.get_total().to_string(),
        name_width = name_width,
    ));

    output
}

/// Format the budget's categories with their color and allocated share
pub fn format_category_list(budget: &Budget) -> String {
    let categories = budget.categories();
    if categories.is_empty() {
        return "No categories.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<7}  {:>6}  {:>12}\n",
        "Category",
        "Color",
        "Weight",
        "Allocated",
        name_width = name_width,
    ));

    for category in categories {
        let allocated: Money = budget.income().scale(category.weight);
        output.push_str(&format!(
            "{:<name_width$}  {:<7}  {:>5.1}%  {:>12}\n",
            category.name,
            category.hex_color().unwrap_or("-"),
            category.weight * 100.0,
            allocated.to_string(),
            name_width = name_width,
        ));
    }

    output
}
