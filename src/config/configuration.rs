//! Persisted application configuration
//!
//! Records which profile opens by default and the income used when a fresh
//! profile is bootstrapped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BudgetError;
use crate::models::{Money, ProfileId};
use crate::storage::file_io::{read_json_required, write_json_atomic};

/// Application configuration stored in `data/config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Profile activated when a session starts
    #[serde(default, alias = "default_profile")]
    pub default_profile_id: Option<ProfileId>,

    /// Income used for the first profile of a fresh installation
    #[serde(default = "default_income")]
    pub default_income: Money,

    #[serde(skip)]
    path: PathBuf,
}

fn default_schema_version() -> u32 {
    1
}

fn default_income() -> Money {
    Money::from_cents(500000)
}

impl Configuration {
    fn with_path(path: PathBuf) -> Self {
        Self {
            schema_version: default_schema_version(),
            default_profile_id: None,
            default_income: default_income(),
            path,
        }
    }

    /// Load the configuration, or create and persist defaults if the file doesn't exist
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, BudgetError> {
        let path = path.as_ref();

        if path.exists() {
            let mut config: Configuration = read_json_required(path).map_err(|e| match e {
                BudgetError::Deserialization { message, .. } => BudgetError::Config(format!(
                    "Failed to parse configuration file {}: {}",
                    path.display(),
                    message
                )),
                other => other,
            })?;
            config.path = path.to_path_buf();
            Ok(config)
        } else {
            let config = Self::with_path(path.to_path_buf());
            config.save()?;
            info!(path = %path.display(), "created default configuration");
            Ok(config)
        }
    }

    /// Save the configuration to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, self)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Id of the default profile, if one was ever set
    pub fn get_default_profile(&self) -> Option<ProfileId> {
        self.default_profile_id
    }

    /// Make `id` the default profile and persist immediately
    ///
    /// Overwrites any existing default.
    pub fn set_default_profile(&mut self, id: ProfileId) -> Result<(), BudgetError> {
        let previous = self.default_profile_id.replace(id);
        if let Err(e) = self.save() {
            self.default_profile_id = previous;
            return Err(e);
        }
        info!(profile_id = %id, "default profile set");
        Ok(())
    }

    /// Change the bootstrap income and persist immediately
    pub fn set_default_income(&mut self, income: Money) -> Result<(), BudgetError> {
        if income.is_negative() {
            return Err(BudgetError::Validation(
                "Default income cannot be negative".to_string(),
            ));
        }
        let previous = std::mem::replace(&mut self.default_income, income);
        if let Err(e) = self.save() {
            self.default_income = previous;
            return Err(e);
        }
        info!(%income, "default income set");
        Ok(())
    }
}
