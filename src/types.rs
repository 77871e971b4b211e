//! Core types for the export pipeline.

use chrono::NaiveDate;

/// A project snapshot fetched from the Things database.
///
/// The snapshot is read-only: it is fetched once per invocation and fully
/// materialized before rendering begins. A project that exists but has no
/// to-dos is a valid snapshot with an empty task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Tag titles in the host's display order.
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Tasks in the host's display order.
    pub tasks: Vec<Task>,
}

/// A single to-do belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub status: TaskStatus,
}

/// Completion state of a task.
///
/// Things stores this as an integer column: 0 = incomplete, 2 = canceled,
/// 3 = completed. Trashed rows are filtered out before they become tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Canceled,
    Completed,
}

impl TaskStatus {
    /// Decode the host's status column. Unknown codes read as incomplete.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => TaskStatus::Canceled,
            3 => TaskStatus::Completed,
            _ => TaskStatus::Incomplete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "incomplete",
            TaskStatus::Canceled => "canceled",
            TaskStatus::Completed => "completed",
        }
    }
}
