//! Data access layer: fetching project snapshots from the host store.

pub mod things;

pub use things::ThingsDb;

use crate::error::Result;
use crate::types::Project;

/// Capability interface for project lookup.
///
/// The renderer and the CLI glue only see this trait, so the pipeline can
/// be exercised against a fixture-backed store in tests while `ThingsDb`
/// serves production.
pub trait ProjectStore {
    /// Fetch a fully-materialized project snapshot by exact title.
    ///
    /// Tags, due date, notes, and the ordered task sequence are all
    /// resolved before this returns; the renderer never goes back to the
    /// store. A missing project is `ExportError::ProjectNotFound`.
    fn fetch(&self, name: &str) -> Result<Project>;
}
