//! Markdown rendering of project snapshots.

use crate::types::{Project, Task, TaskStatus};

/// Indent applied to task note lines. Two spaces, never tabs. Blank lines
/// inside a note stay blank so the output carries no trailing whitespace.
const NOTE_INDENT: &str = "  ";

/// Render a project snapshot as a Markdown document.
///
/// This is a total, pure function of the snapshot: rendering the same
/// project twice yields byte-identical output. Markdown metacharacters in
/// names, tags, and notes pass through unescaped.
pub fn render_project(project: &Project) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n", project.name));

    if !project.tags.is_empty() {
        md.push_str(&format!("**Tags:** {}\n", project.tags.join(", ")));
    }

    if let Some(due) = project.due_date {
        md.push_str(&format!("**Due Date:** {}\n", due.format("%Y-%m-%d")));
    }

    if let Some(notes) = project.notes.as_deref() {
        md.push('\n');
        md.push_str("## Project Notes\n\n");
        md.push_str(notes.trim_end_matches('\n'));
        md.push('\n');
    }

    md.push('\n');
    md.push_str("## Tasks\n");

    // A blank line before each entry doubles as the separator between
    // entries; a project with zero tasks ends at the heading.
    for task in &project.tasks {
        md.push('\n');
        md.push_str(&render_task(task));
    }

    md
}

/// Render a single task entry: the bullet line plus indented note lines.
fn render_task(task: &Task) -> String {
    let mut entry = String::new();

    entry.push_str("- ");
    entry.push_str(&task.name);

    if !task.tags.is_empty() {
        entry.push_str(&format!(" *({})*", task.tags.join(", ")));
    }

    // Closed tasks get a visible marker; open tasks render bare.
    match task.status {
        TaskStatus::Incomplete => {}
        TaskStatus::Completed => entry.push_str(" [completed]"),
        TaskStatus::Canceled => entry.push_str(" [canceled]"),
    }
    entry.push('\n');

    if let Some(notes) = task.notes.as_deref() {
        for line in notes.trim_end_matches('\n').split('\n') {
            if line.is_empty() {
                entry.push('\n');
            } else {
                entry.push_str(NOTE_INDENT);
                entry.push_str(line);
                entry.push('\n');
            }
        }
    }

    entry
}
