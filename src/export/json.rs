//! JSON Export functionality
//!
//! Exports a profile to the same JSON shape used for its stored record.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Profile;

/// Export a profile as pretty-printed JSON
pub fn export_profile_json<W: Write>(profile: &Profile, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &profile.to_record())?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
