//! things2md
//!
//! Export a Things 3 project, with its tags, due date, notes, and tasks,
//! as a Markdown document on stdout.

use clap::Parser;
use std::fs::OpenOptions;
use std::process::ExitCode;
use things2md::cli::Cli;
use things2md::error::{ExportError, Result};
use things2md::format::render_project;
use things2md::paths;
use things2md::store::{ProjectStore, ThingsDb};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(markdown) => {
            // The document is complete before the first byte is written;
            // a failed run never produces partial output.
            print!("{}", markdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on the --log option.
fn init_logging(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

/// Fetch the requested project and render it.
fn run(cli: &Cli) -> Result<String> {
    if cli.project.trim().is_empty() {
        return Err(ExportError::EmptyProjectName);
    }

    let db_path = match &cli.database {
        Some(path) => path.clone(),
        None => paths::default_database_path()?,
    };
    debug!(path = %db_path.display(), "Opening Things database");

    let store = ThingsDb::open(&db_path)?;
    let project = store.fetch(&cli.project)?;

    Ok(render_project(&project))
}
