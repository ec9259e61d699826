//! Profile display formatting

use crate::models::{Profile, ProfileId};
use crate::storage::ProfileEntry;

/// Format the stored profiles as a table, marking the default one
pub fn format_profile_list(entries: &[ProfileEntry], default_id: Option<ProfileId>) -> String {
    if entries.is_empty() {
        return "No profiles found.".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.profile.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:<36}  {:>12}\n",
        "Name",
        "ID",
        "Income",
        name_width = name_width,
    ));

    for entry in entries {
        let marker = if Some(entry.profile.id) == default_id {
            '*'
        } else {
            ' '
        };
        output.push_str(&format!(
            "{} {:<name_width$}  {:<36}  {:>12}\n",
            marker,
            entry.profile.name,
            entry.profile.id,
            entry.profile.income.to_string(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single profile with its budget summary
pub fn format_profile_details(profile: &Profile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Profile: {}\n", profile.name));
    output.push_str(&format!("  ID:       {}\n", profile.id));
    output.push_str(&format!("  Income:   {}\n", profile.income));
    output.push_str(&format!("  Expenses: {}\n", profile.budget.get_total()));
    output.push_str(&format!("  Rows:     {}\n", profile.budget.len()));

    let household = profile.budget.household();
    output.push_str(&format!(
        "  Housing:  {}\n",
        if household.is_home_owner { "Owner" } else { "Renter" }
    ));
    output.push_str(&format!(
        "  Vehicle:  {}\n",
        if household.is_vehicle_owner { "Yes" } else { "No" }
    ));

    if let Some(created) = profile.created_at {
        output.push_str(&format!("  Created:  {}\n", created.format("%Y-%m-%d %H:%M")));
    }
    if let Some(updated) = profile.updated_at {
        output.push_str(&format!("  Updated:  {}\n", updated.format("%Y-%m-%d %H:%M")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::path::PathBuf;

    #[test]
    fn test_format_profile_list_marks_default() {
        let home = Profile::new("Home", Money::from_cents(500000));
        let side = Profile::new("Side", Money::zero());
        let default_id = home.id;
        let entries = vec![
            ProfileEntry {
                path: PathBuf::from("home.json"),
                profile: home,
            },
            ProfileEntry {
                path: PathBuf::from("side.json"),
                profile: side,
            },
        ];

        let output = format_profile_list(&entries, Some(default_id));
        let home_line = output.lines().find(|l| l.contains("Home")).unwrap();
        let side_line = output.lines().find(|l| l.contains("Side")).unwrap();

        assert!(home_line.starts_with('*'));
        assert!(side_line.starts_with(' '));
        assert!(home_line.contains("$5,000.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_profile_list(&[], None), "No profiles found.");
    }

    #[test]
    fn test_format_profile_details() {
        let profile = Profile::new("Details", Money::from_cents(500000));
        let output = format_profile_details(&profile);

        assert!(output.contains("Profile: Details"));
        assert!(output.contains("Renter"));
        assert!(output.contains(&profile.id.to_string()));
    }
}
