//! Profile store
//!
//! Keeps one JSON record per profile in the data directory, named by the
//! profile id, next to the reserved configuration record. Tracks the profile
//! that is active for the current session.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::file_io::{read_json_required, write_json_atomic};
use crate::config::paths::{TrackerPaths, CONFIG_FILE_NAME, RECORD_EXTENSION};
use crate::config::Configuration;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Profile, ProfileId, ProfileRecord, DEFAULT_PROFILE_NAME};

/// Change notification emitted after a successful persist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEvent {
    Created(ProfileId),
    Activated(ProfileId),
    Updated(ProfileId),
}

impl ProfileEvent {
    /// Id of the profile the event is about
    pub fn profile_id(&self) -> ProfileId {
        match self {
            Self::Created(id) | Self::Activated(id) | Self::Updated(id) => *id,
        }
    }
}

type ChangeHandler = Box<dyn FnMut(&ProfileEvent)>;

/// A profile found while listing the data directory
#[derive(Debug, Clone)]
pub struct ProfileEntry {
    pub path: PathBuf,
    pub profile: Profile,
}

/// Persistence for profiles plus the active-profile session state
pub struct ProfileStore {
    paths: TrackerPaths,
    configuration: Configuration,
    active: Option<Profile>,
    handlers: Vec<ChangeHandler>,
}

impl fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStore")
            .field("paths", &self.paths)
            .field("configuration", &self.configuration)
            .field("active", &self.active.as_ref().map(|p| p.id))
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl ProfileStore {
    /// Open the store, creating the data directory and configuration if needed
    pub fn open(paths: TrackerPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        let configuration = Configuration::load_or_create(paths.config_file())?;
        debug!(data_dir = %paths.data_dir().display(), "profile store opened");

        Ok(Self {
            paths,
            configuration,
            active: None,
            handlers: Vec::new(),
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Record path for the profile with the given id
    pub fn profile_path(&self, id: ProfileId) -> PathBuf {
        self.paths.profile_file(&id.to_full_string())
    }

    /// Register a callback run after every successful persist
    pub fn on_change<F>(&mut self, handler: F)
    where
        F: FnMut(&ProfileEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    fn emit(&mut self, event: ProfileEvent) {
        for handler in &mut self.handlers {
            handler(&event);
        }
    }

    /// Create and persist a new profile, returning the path of its record
    ///
    /// The new profile becomes the default only when no default is set yet.
    pub fn create_new_profile(&mut self, name: Option<&str>, income: Money) -> BudgetResult<PathBuf> {
        if income.is_negative() {
            return Err(BudgetError::Validation(
                "Profile income cannot be negative".to_string(),
            ));
        }

        let name = match name.map(str::trim) {
            Some("") => {
                return Err(BudgetError::Validation(
                    "Profile name cannot be empty".to_string(),
                ))
            }
            Some(name) => name,
            None => DEFAULT_PROFILE_NAME,
        };

        let profile = Profile::new(name, income);
        let path = self.profile_path(profile.id);
        self.save_data(&path, &profile)?;

        if self.configuration.get_default_profile().is_none() {
            if let Err(e) = self.configuration.set_default_profile(profile.id) {
                if let Err(remove_err) = fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %remove_err, "failed to remove new profile record");
                }
                return Err(e);
            }
        }

        info!(profile_id = %profile.id, name = %profile.name, %income, "profile created");
        self.emit(ProfileEvent::Created(profile.id));
        Ok(path)
    }

    /// Serialize `value` to `path`, replacing any previous content
    pub fn save_data<T: Serialize>(&self, path: &Path, value: &T) -> BudgetResult<()> {
        write_json_atomic(path, value)
    }

    /// Load the profile record at `path`
    ///
    /// A record without an id takes the id encoded in its file name, or a new
    /// one when the name is not an id. Records in the data directory that are
    /// not stored under `<id>.json` are moved there, so the id stays stable
    /// across loads.
    pub fn load_data(&self, path: &Path) -> BudgetResult<Profile> {
        let profile = self.read_profile(path)?;
        let canonical = self.profile_path(profile.id);

        if path.parent() == Some(self.paths.data_dir().as_path()) && path != canonical {
            self.relocate(path, &canonical, &profile);
        }

        Ok(profile)
    }

    fn read_profile(&self, path: &Path) -> BudgetResult<Profile> {
        let mut record: ProfileRecord = read_json_required(path)?;

        if record.profile_id.is_none() {
            record.profile_id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| ProfileId::parse(stem).ok());
        }

        Profile::from_record(record).map_err(|e| match e {
            BudgetError::Validation(message) => BudgetError::deserialization(path, message),
            other => other,
        })
    }

    fn relocate(&self, from: &Path, to: &Path, profile: &Profile) {
        if to.exists() {
            warn!(
                path = %from.display(),
                profile_id = %profile.id,
                "another record already holds this profile id, leaving it in place"
            );
            return;
        }

        if let Err(e) = self.save_data(to, profile) {
            warn!(path = %from.display(), error = %e, "failed to move profile record");
            return;
        }

        match fs::remove_file(from) {
            Ok(()) => info!(from = %from.display(), to = %to.display(), "profile record moved"),
            Err(e) => warn!(path = %from.display(), error = %e, "failed to remove old profile record"),
        }
    }

    /// List every loadable profile in the data directory
    ///
    /// Corrupt records are skipped with a warning. Results are ordered by
    /// name, then id.
    pub fn get_profiles(&self) -> BudgetResult<Vec<ProfileEntry>> {
        let data_dir = self.paths.data_dir();
        let entries = fs::read_dir(&data_dir).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to read data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        // Collect first: loading may move records within the directory
        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if is_profile_record(&entry.path()) => paths.push(entry.path()),
                Ok(_) => {}
                Err(e) => {
                    warn!(data_dir = %data_dir.display(), error = %e, "skipping unreadable directory entry")
                }
            }
        }

        let mut profiles = Vec::new();
        for path in paths {
            match self.load_data(&path) {
                Ok(profile) => {
                    let path = if path.exists() { path } else { self.profile_path(profile.id) };
                    profiles.push(ProfileEntry { path, profile })
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable profile"),
            }
        }

        profiles.sort_by(|a, b| {
            a.profile
                .name
                .cmp(&b.profile.name)
                .then(a.profile.id.cmp(&b.profile.id))
        });
        Ok(profiles)
    }

    /// Load the profile at `path` and make it the active one
    ///
    /// Also makes it the default profile when none is set.
    pub fn set_active_profile(&mut self, path: &Path) -> BudgetResult<()> {
        let profile = self.load_data(path)?;
        let id = profile.id;

        if self.configuration.get_default_profile().is_none() {
            self.configuration.set_default_profile(id)?;
        }

        self.active = Some(profile);
        info!(profile_id = %id, "profile activated");
        self.emit(ProfileEvent::Activated(id));
        Ok(())
    }

    /// The profile active in this session
    pub fn get_active_profile(&self) -> BudgetResult<&Profile> {
        self.active
            .as_ref()
            .ok_or_else(|| BudgetError::State("No active profile has been set".to_string()))
    }

    /// Persist the whole active profile to its own record
    pub fn update_profile(&mut self) -> BudgetResult<()> {
        let mut profile = self.get_active_profile()?.clone();
        self.commit(&mut profile)?;
        self.active = Some(profile);
        Ok(())
    }

    /// Apply `edit` to the active profile and persist the result
    ///
    /// The edit runs on a copy. Memory and disk change only if both the edit
    /// and the write succeed.
    pub fn update_active<F, T>(&mut self, edit: F) -> BudgetResult<T>
    where
        F: FnOnce(&mut Profile) -> BudgetResult<T>,
    {
        let mut profile = self.get_active_profile()?.clone();
        let output = edit(&mut profile)?;
        self.commit(&mut profile)?;
        self.active = Some(profile);
        Ok(output)
    }

    fn commit(&mut self, profile: &mut Profile) -> BudgetResult<()> {
        profile.updated_at = Some(Utc::now());
        let path = self.profile_path(profile.id);
        self.save_data(&path, profile)?;

        debug!(profile_id = %profile.id, path = %path.display(), "profile saved");
        self.emit(ProfileEvent::Updated(profile.id));
        Ok(())
    }
}

fn is_profile_record(path: &Path) -> bool {
    let is_record = path
        .extension()
        .map_or(false, |ext| ext == RECORD_EXTENSION);
    let is_config = path
        .file_name()
        .map_or(false, |name| name == CONFIG_FILE_NAME);

    path.is_file() && is_record && !is_config
}
