//! CLI definition for things2md.

use clap::Parser;
use std::path::PathBuf;

/// Export a Things 3 project to Markdown on stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project to export (exact title match)
    pub project: String,

    /// Path to the Things database file (default: auto-discovered)
    #[arg(short, long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 2/stderr (default), or filename
    ///
    /// Stdout is not offered as a sink because it carries the export.
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
