//! Session bootstrap
//!
//! Picks the profile a session works on, creating one on first run.

use tracing::{info, warn};

use crate::error::BudgetResult;
use crate::models::ProfileId;
use crate::storage::ProfileStore;

/// Activate the default profile, creating one when the store is empty
///
/// A missing or dangling default falls back to the first listed profile,
/// which then becomes the default.
pub fn start_session(store: &mut ProfileStore) -> BudgetResult<ProfileId> {
    let mut profiles = store.get_profiles()?;

    if profiles.is_empty() {
        let income = store.configuration().default_income;
        info!(%income, "no profiles found, creating the default profile");
        let path = store.create_new_profile(None, income)?;
        store.set_active_profile(&path)?;
        return store.get_active_profile().map(|p| p.id);
    }

    let default_id = store.configuration().get_default_profile();
    let default_entry = default_id.and_then(|id| {
        profiles
            .iter()
            .position(|entry| entry.profile.id == id)
    });

    let entry = match default_entry {
        Some(index) => profiles.swap_remove(index),
        None => {
            if let Some(id) = default_id {
                warn!(profile_id = %id, "default profile not found, using the first profile");
            }
            let first = profiles.swap_remove(0);
            store.configuration_mut().set_default_profile(first.profile.id)?;
            first
        }
    };

    store.set_active_profile(&entry.path)?;
    Ok(entry.profile.id)
}
