//! Locating the Things 3 database on disk.

use crate::error::{ExportError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Group container holding the Things data store, relative to the home
/// directory.
const GROUP_CONTAINER: &str = "Library/Group Containers/JLMPQHK86H.com.culturedcode.ThingsMac";

/// Database bundle path inside a data directory.
const DATABASE_BUNDLE: &str = "Things Database.thingsdatabase/main.sqlite";

/// Locate the Things database for the current user.
///
/// Recent Things versions keep the store under a per-account
/// `ThingsData-<id>` directory inside the group container; older installs
/// place the bundle directly in the container. Both layouts are probed,
/// newest first.
pub fn default_database_path() -> Result<PathBuf> {
    let container = dirs::home_dir()
        .map(|home| home.join(GROUP_CONTAINER))
        .ok_or_else(|| ExportError::host_unavailable(GROUP_CONTAINER))?;

    if let Ok(entries) = fs::read_dir(&container) {
        for entry in entries.flatten() {
            if entry.file_name().to_string_lossy().starts_with("ThingsData") {
                let candidate = entry.path().join(DATABASE_BUNDLE);
                if candidate.is_file() {
                    debug!(path = %candidate.display(), "Found Things database");
                    return Ok(candidate);
                }
            }
        }
    }

    let legacy = container.join(DATABASE_BUNDLE);
    if legacy.is_file() {
        debug!(path = %legacy.display(), "Found Things database (legacy layout)");
        return Ok(legacy);
    }

    Err(ExportError::host_unavailable(container))
}
