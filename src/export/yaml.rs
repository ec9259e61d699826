//! YAML Export functionality
//!
//! Exports a profile to YAML format for human-readable backup.

use std::io::Write;

use chrono::Utc;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Profile;

/// Export a profile to YAML format
pub fn export_profile_yaml<W: Write>(profile: &Profile, writer: &mut W) -> BudgetResult<()> {
    let export_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    // Add a header comment
    writeln!(writer, "# Budget Tracker Profile Export").map_err(export_err)?;
    writeln!(writer, "# Profile: {}", profile.name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", Utc::now().to_rfc3339()).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION")).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &profile.to_record())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ProfileRecord};

    #[test]
    fn test_yaml_export() {
        let profile = Profile::new("Yaml", Money::from_cents(500000));

        let mut buffer = Vec::new();
        export_profile_yaml(&profile, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Budget Tracker Profile Export"));
        assert!(yaml.contains("profile_name: Yaml"));
        assert!(yaml.contains("- Rent"));
    }

    #[test]
    fn test_yaml_export_loads_back() {
        let profile = Profile::new("Round", Money::from_cents(123456));

        let mut buffer = Vec::new();
        export_profile_yaml(&profile, &mut buffer).unwrap();

        let record: ProfileRecord = serde_yaml::from_slice(&buffer).unwrap();
        assert_eq!(record.profile_id, Some(profile.id));
        assert_eq!(record.income, profile.income);
    }
}
