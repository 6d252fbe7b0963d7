use std::path::PathBuf;
use std::time::Duration;

use qsearch::search::SessionConfig;
use qsearch::ui::UiOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// Canonical, de-duplicated search roots.
	pub roots: Vec<PathBuf>,
	pub tool: PathBuf,
	pub min_query_length: usize,
	pub max_output_kib: usize,
	pub debounce_ms: u64,
	pub title: String,
	pub initial_query: String,
	pub peek_entry: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Tunables for the search session.
	#[must_use]
	pub fn session_config(&self) -> SessionConfig {
		SessionConfig {
			tool: self.tool.clone(),
			min_query_length: self.min_query_length,
			max_output_bytes: self.max_output_kib.saturating_mul(1024),
			debounce: Duration::from_millis(self.debounce_ms),
			peek_entry: self.peek_entry,
		}
	}

	/// Presentation options for the terminal front end.
	#[must_use]
	pub fn ui_options(&self) -> UiOptions {
		UiOptions {
			title: self.title.clone(),
			initial_query: self.initial_query.clone(),
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
