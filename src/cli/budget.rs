//! Budget CLI commands
//!
//! Implements CLI commands for viewing and editing the active profile's budget.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::display::budget::{format_budget_table, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{csv, json, yaml};
use crate::models::Household;
use crate::services::import::import_legacy_csv_file;
use crate::storage::ProfileStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (line items only)
    Csv,
    /// JSON format (full profile record)
    Json,
    /// YAML format (full profile record, human-readable)
    Yaml,
}

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the active profile's budget
    Show {
        /// Show categories instead of line items
        #[arg(short, long)]
        categories: bool,
    },

    /// Set the cost of a line item
    #[command(name = "set-cost")]
    SetCost {
        /// Row number (as shown by `budget show`)
        row: usize,
        /// New cost (e.g., "850" or "$1,200.50")
        amount: String,
    },

    /// Rename a line item
    #[command(name = "rename-expense")]
    RenameExpense {
        /// Row number (as shown by `budget show`)
        row: usize,
        /// New name
        name: String,
    },

    /// Rename a category
    #[command(name = "rename-category")]
    RenameCategory {
        /// Current category name
        old: String,
        /// New category name
        new: String,
    },

    /// Rebuild the line items from the income, discarding manual edits
    Reassemble {
        /// Whether the household owns its home
        #[arg(long)]
        home_owner: Option<bool>,
        /// Whether the household owns a vehicle
        #[arg(long)]
        vehicle_owner: Option<bool>,
    },

    /// Export the budget to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Replace the budget with a legacy `Category,Name,Cost per Month` sheet
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut ProfileStore, cmd: BudgetCommands) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Show { categories } => {
            let profile = store.get_active_profile()?;
            println!("Budget for {} (income {})", profile.name, profile.income);
            println!();
            if categories {
                print!("{}", format_category_list(&profile.budget));
            } else {
                print!("{}", format_budget_table(&profile.budget));
            }
        }

        BudgetCommands::SetCost { row, amount } => {
            let cost = store.update_active(|profile| profile.budget.edit_cost(row, &amount))?;
            let name = store.get_active_profile()?.budget.names()[row].clone();
            println!("Set cost of '{}' to {}", name, cost);
        }

        BudgetCommands::RenameExpense { row, name } => {
            store.update_active(|profile| profile.budget.rename_expense(row, &name))?;
            println!("Renamed row {} to '{}'", row, name.trim());
        }

        BudgetCommands::RenameCategory { old, new } => {
            store.update_active(|profile| profile.budget.rename_category(&old, &new))?;
            println!("Renamed category '{}' to '{}'", old, new.trim());
        }

        BudgetCommands::Reassemble {
            home_owner,
            vehicle_owner,
        } => {
            store.update_active(|profile| {
                let current = profile.budget.household();
                profile.budget.reassemble_with(Household {
                    is_home_owner: home_owner.unwrap_or(current.is_home_owner),
                    is_vehicle_owner: vehicle_owner.unwrap_or(current.is_vehicle_owner),
                });
                Ok(())
            })?;

            let profile = store.get_active_profile()?;
            println!(
                "Reassembled {} rows totalling {}",
                profile.budget.len(),
                profile.budget.get_total()
            );
        }

        BudgetCommands::Export { output, format } => {
            let profile = store.get_active_profile()?;
            let file = File::create(&output).map_err(|e| {
                BudgetError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);

            match format {
                ExportFormat::Csv => csv::export_budget_csv(&profile.budget, &mut writer)?,
                ExportFormat::Json => json::export_profile_json(profile, &mut writer)?,
                ExportFormat::Yaml => yaml::export_profile_yaml(profile, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;

            println!("Budget exported to: {}", output.display());
        }

        BudgetCommands::Import { file } => {
            let budget = import_legacy_csv_file(&file)?;
            let rows = budget.len();
            store.update_active(|profile| {
                profile.income = budget.income();
                profile.budget = budget;
                Ok(())
            })?;

            println!("Imported {} rows from {}", rows, file.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::models::Money;
    use crate::services::start_session;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ProfileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = ProfileStore::open(paths).unwrap();
        start_session(&mut store).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_set_cost_persists() {
        let (_temp_dir, mut store) = create_test_store();
        handle_budget_command(
            &mut store,
            BudgetCommands::SetCost {
                row: 0,
                amount: "$1,200.50".into(),
            },
        )
        .unwrap();

        let path = store.profile_path(store.get_active_profile().unwrap().id);
        let stored = store.load_data(&path).unwrap();
        assert_eq!(stored.budget.costs()[0], Money::from_cents(120050));
    }

    #[test]
    fn test_set_cost_rejects_text_and_keeps_value() {
        let (_temp_dir, mut store) = create_test_store();
        let before = store.get_active_profile().unwrap().budget.costs()[0];

        let err = handle_budget_command(
            &mut store,
            BudgetCommands::SetCost {
                row: 0,
                amount: "abc".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.get_active_profile().unwrap().budget.costs()[0], before);
    }

    #[test]
    fn test_set_cost_unknown_row() {
        let (_temp_dir, mut store) = create_test_store();
        let err = handle_budget_command(
            &mut store,
            BudgetCommands::SetCost {
                row: 999,
                amount: "1".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reassemble_as_home_owner() {
        let (_temp_dir, mut store) = create_test_store();
        handle_budget_command(
            &mut store,
            BudgetCommands::Reassemble {
                home_owner: Some(true),
                vehicle_owner: None,
            },
        )
        .unwrap();

        let budget = &store.get_active_profile().unwrap().budget;
        assert_eq!(budget.names()[0], "Mortgage");
        assert!(budget.household().is_vehicle_owner);
    }

    #[test]
    fn test_export_csv() {
        let (temp_dir, mut store) = create_test_store();
        let output = temp_dir.path().join("budget.csv");

        handle_budget_command(
            &mut store,
            BudgetCommands::Export {
                output: output.clone(),
                format: ExportFormat::Csv,
            },
        )
        .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Name,Cost per Month,Percent"));
        assert!(content.contains("Rent,962.50,"));
    }

    #[test]
    fn test_import_replaces_budget() {
        let (temp_dir, mut store) = create_test_store();
        let sheet = temp_dir.path().join("legacy.csv");
        fs::write(
            &sheet,
            "Category,Name,Cost per Month\nIncome,Monthly Income,2000\nHousing,Rent,\"$1,000.00\"\n",
        )
        .unwrap();

        handle_budget_command(&mut store, BudgetCommands::Import { file: sheet }).unwrap();

        let profile = store.get_active_profile().unwrap();
        assert_eq!(profile.income, Money::from_cents(200000));
        assert_eq!(profile.budget.names(), ["Rent"]);
        assert_eq!(profile.budget.costs(), [Money::from_cents(100000)]);
    }
}
