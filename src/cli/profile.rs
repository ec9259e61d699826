//! Profile CLI commands
//!
//! Implements CLI commands for creating, listing, and editing profiles.

use clap::Subcommand;

use crate::display::profile::{format_profile_details, format_profile_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, ProfileId};
use crate::storage::{ProfileEntry, ProfileStore};

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all profiles (the default is marked with *)
    List,

    /// Create a new profile with a budget assembled from its income
    Create {
        /// Profile name
        name: String,
        /// Monthly income (e.g., "5000" or "$5,000.00"); defaults to the configured income
        #[arg(short, long)]
        income: Option<String>,
    },

    /// Make a profile the default and activate it
    Use {
        /// Profile name or ID
        profile: String,
    },

    /// Show profile details (the active profile if none is given)
    Show {
        /// Profile name or ID
        profile: Option<String>,
    },

    /// Rename the active profile
    Rename {
        /// New name
        name: String,
    },

    /// Change the active profile's income
    Income {
        /// Monthly income (e.g., "5000" or "$5,000.00")
        amount: String,
        /// Reassemble the budget rows from the new income
        #[arg(long)]
        reassemble: bool,
    },
}

/// Handle a profile command
pub fn handle_profile_command(store: &mut ProfileStore, cmd: ProfileCommands) -> BudgetResult<()> {
    match cmd {
        ProfileCommands::List => {
            let entries = store.get_profiles()?;
            let default_id = store.configuration().get_default_profile();
            println!("{}", format_profile_list(&entries, default_id));
        }

        ProfileCommands::Create { name, income } => {
            let income = match income {
                Some(amount) => parse_amount(&amount)?,
                None => store.configuration().default_income,
            };
            let path = store.create_new_profile(Some(&name), income)?;
            let profile = store.load_data(&path)?;

            println!("Created profile: {}", profile.name);
            println!("  ID:     {}", profile.id);
            println!("  Income: {}", profile.income);
            println!("  Rows:   {}", profile.budget.len());
        }

        ProfileCommands::Use { profile } => {
            let entry = find_profile(store, &profile)?;
            store.set_active_profile(&entry.path)?;
            store
                .configuration_mut()
                .set_default_profile(entry.profile.id)?;

            println!("Now using profile: {}", entry.profile.name);
        }

        ProfileCommands::Show { profile } => {
            let details = match profile {
                Some(query) => format_profile_details(&find_profile(store, &query)?.profile),
                None => format_profile_details(store.get_active_profile()?),
            };
            print!("{}", details);
        }

        ProfileCommands::Rename { name } => {
            let old_name = store.get_active_profile()?.name.clone();
            store.update_active(|profile| profile.set_name(&name))?;

            println!(
                "Renamed profile '{}' to '{}'",
                old_name,
                store.get_active_profile()?.name
            );
        }

        ProfileCommands::Income { amount, reassemble } => {
            let income = parse_amount(&amount)?;
            store.update_active(|profile| {
                profile.set_income(income)?;
                if reassemble {
                    profile.budget.reassemble();
                }
                Ok(())
            })?;

            println!("Income set to {}", income);
            if reassemble {
                println!("Budget rows reassembled from the new income.");
            }
        }
    }

    Ok(())
}

/// Parse a money amount given on the command line
pub(crate) fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input)
        .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

/// Find a stored profile by ID, short ID, or name (case-insensitive)
fn find_profile(store: &ProfileStore, query: &str) -> BudgetResult<ProfileEntry> {
    let entries = store.get_profiles()?;

    if let Ok(id) = query.parse::<ProfileId>() {
        if let Some(entry) = entries.iter().find(|e| e.profile.id == id) {
            return Ok(entry.clone());
        }
    }

    let query_lower = query.to_lowercase();
    entries
        .into_iter()
        .find(|e| {
            e.profile.name.to_lowercase() == query_lower || e.profile.id.short() == query_lower
        })
        .ok_or_else(|| BudgetError::profile_not_found(query))
}
