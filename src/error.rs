//! Error taxonomy for the export pipeline.
//!
//! Every variant is terminal for the process: `main` reports it on stderr
//! and exits non-zero. Nothing is retried internally.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No project with the requested title exists in the host store.
    /// Distinct from a project that exists but has zero tasks.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// The Things database could not be located or opened.
    #[error("Things database unavailable at {}: is Things 3 installed?", .path.display())]
    HostUnavailable { path: PathBuf },

    /// The project name argument was present but blank.
    #[error("project name cannot be empty")]
    EmptyProjectName,

    /// The host store exists but a query against it failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ExportError {
    pub fn project_not_found(name: &str) -> Self {
        ExportError::ProjectNotFound(name.to_string())
    }

    pub fn host_unavailable(path: impl Into<PathBuf>) -> Self {
        ExportError::HostUnavailable { path: path.into() }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
