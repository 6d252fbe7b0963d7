//! File logging for the terminal front end.
//!
//! The terminal belongs to the picker while it runs, so log records go to
//! `qsearch.log` in the data directory instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

const LOG_FILE_NAME: &str = "qsearch.log";

/// Path of the log file inside `dir`.
#[must_use]
pub fn log_file(dir: &Path) -> PathBuf {
	dir.join(LOG_FILE_NAME)
}

/// Install a global logger writing to `dir/qsearch.log`, truncating any
/// previous session's log.
pub fn initialize(dir: &Path, level: LevelFilter) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = log_file(dir);
	let file = File::create(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_thread_level(LevelFilter::Off)
		.build();
	WriteLogger::init(level, config, file).context("a logger is already installed")?;
	log::info!("qsearch {} logging at {level}", env!("CARGO_PKG_VERSION"));
	Ok(path)
}
