//! ghostlog CLI - interactive evidence journal.
//!
//! # Architecture
//!
//! The CLI is the presentation layer over [`ghostlog_core`]: it loads the
//! reference table from [`ghostlog_config`], then runs a line-oriented loop
//! that parses a command, applies it to the [`Investigation`], and re-renders
//! the board.
//!
//! ```text
//! main() -> GhostlogConfig::load() -> Investigation::new(table) -> Session::run(stdin, stdout)
//! ```

mod commands;
mod render;
mod session;

use anyhow::Result;
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ghostlog_config::GhostlogConfig;
use ghostlog_core::Investigation;
use ghostlog_types::ReferenceTable;

use crate::render::RenderStyle;
use crate::session::Session;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over interleaving them
    // with the interactive board on stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.ghostlog/logs/ghostlog.log
    if let Some(config_path) = GhostlogConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("ghostlog.log"));
    }

    // Fallback: ./.ghostlog/logs/ghostlog.log
    candidates.push(PathBuf::from(".ghostlog").join("logs").join("ghostlog.log"));

    candidates
}

/// Load config, falling back to defaults with a warning on any problem.
fn load_config() -> GhostlogConfig {
    match GhostlogConfig::load() {
        Ok(Some(config)) => {
            tracing::info!("Loaded config");
            config
        }
        Ok(None) => GhostlogConfig::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            eprintln!("warning: {err}; using built-in defaults");
            GhostlogConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let table = config.reference_table().unwrap_or_else(|err| {
        tracing::warn!("Invalid reference table: {err}. Using built-in table.");
        ReferenceTable::standard()
    });
    tracing::info!(
        ghosts = table.ghosts().len(),
        evidence = table.evidence_order().len(),
        "Reference table ready"
    );

    let mut session = Session::new(Investigation::new(table), RenderStyle::from_config(&config));
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), BufWriter::new(stdout.lock()))?;

    tracing::info!("Session ended");
    Ok(())
}
