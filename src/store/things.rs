//! Read-only rusqlite adapter over the Things 3 database.
//!
//! Things keeps everything in one SQLite file. The tables this adapter
//! touches: `TMTask` holds projects (type 1), to-dos (type 0), and
//! headings (type 2) in a single table, ordered by its `"index"` column;
//! `TMTag` and `TMTaskTag` form the tag join.

use super::ProjectStore;
use crate::error::{ExportError, Result};
use crate::types::{Project, Task, TaskStatus};
use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;
use tracing::debug;

/// Item types in the TMTask table.
const TYPE_TODO: i64 = 0;
const TYPE_PROJECT: i64 = 1;

/// Handle on the Things database.
pub struct ThingsDb {
    conn: Connection,
}

impl std::fmt::Debug for ThingsDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThingsDb").finish_non_exhaustive()
    }
}

impl ThingsDb {
    /// Open the database at `path`.
    ///
    /// The connection uses SQLite's read-only flag: the host store is
    /// never written. A missing file reports as the host being
    /// unavailable rather than a database error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExportError::host_unavailable(path));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self { conn })
    }

    /// Tag titles attached to a task or project, in display order.
    fn tags_for(&self, item_uuid: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.title FROM TMTag g
             JOIN TMTaskTag tt ON tt.tags = g.uuid
             WHERE tt.tasks = ?1
             ORDER BY g.\"index\"",
        )?;

        let rows = stmt.query_map(params![item_uuid], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Non-trashed to-dos belonging to a project, in display order.
    /// Headings are not tasks and are skipped by the type filter.
    fn tasks_for(&self, project_uuid: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, notes, status FROM TMTask
             WHERE project = ?1 AND type = ?2 AND trashed = 0
             ORDER BY \"index\"",
        )?;

        let rows = stmt.query_map(params![project_uuid, TYPE_TODO], |row| {
            let uuid: String = row.get(0)?;
            let title: String = row.get(1)?;
            let notes: Option<String> = row.get(2)?;
            let status: i64 = row.get(3)?;
            Ok((uuid, title, notes, status))
        })?;
        let raw = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        let mut tasks = Vec::with_capacity(raw.len());
        for (uuid, title, notes, status) in raw {
            tasks.push(Task {
                name: title,
                tags: self.tags_for(&uuid)?,
                notes: non_empty(notes),
                status: TaskStatus::from_code(status),
            });
        }
        Ok(tasks)
    }
}

impl ProjectStore for ThingsDb {
    fn fetch(&self, name: &str) -> Result<Project> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, notes, deadline FROM TMTask
             WHERE type = ?1 AND trashed = 0 AND title = ?2
             ORDER BY \"index\" LIMIT 1",
        )?;

        // The host does not enforce unique titles; take the first match
        // in display order, matching what the Things UI surfaces.
        let row = stmt.query_row(params![TYPE_PROJECT, name], |row| {
            let uuid: String = row.get(0)?;
            let title: String = row.get(1)?;
            let notes: Option<String> = row.get(2)?;
            let deadline: Option<i64> = row.get(3)?;
            Ok((uuid, title, notes, deadline))
        });

        let (uuid, title, notes, deadline) = match row {
            Ok(fields) => fields,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(ExportError::project_not_found(name));
            }
            Err(e) => return Err(e.into()),
        };

        let tags = self.tags_for(&uuid)?;
        let tasks = self.tasks_for(&uuid)?;
        debug!(project = %title, tasks = tasks.len(), "Fetched project snapshot");

        Ok(Project {
            name: title,
            tags,
            due_date: deadline.and_then(decode_packed_date),
            notes: non_empty(notes),
            tasks,
        })
    }
}

/// Decode a Things packed date column.
///
/// The integer layout is `year << 16 | month << 12 | day << 7`; the low
/// seven bits are unused. Zero, NULL, and out-of-range components all
/// read as "no date".
fn decode_packed_date(value: i64) -> Option<NaiveDate> {
    if value <= 0 {
        return None;
    }
    let year = (value >> 16) as i32;
    let month = ((value >> 12) & 0xF) as u32;
    let day = ((value >> 7) & 0x1F) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Things stores absent notes as the empty string.
fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
