use std::path::PathBuf;

use serde::Deserialize;

use qsearch::search::{DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_TOOL};

use crate::cli::CliArgs;

/// `[search]` values as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) tool: Option<PathBuf>,
	pub(super) min_query_length: Option<usize>,
	pub(super) max_output_kib: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
}

pub(super) struct SearchResolution {
	pub(super) tool: PathBuf,
	pub(super) min_query_length: usize,
	pub(super) max_output_kib: usize,
	pub(super) debounce_ms: u64,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(tool) = cli.tool.clone() {
			self.tool = Some(tool);
		}
		if let Some(value) = cli.min_query_length {
			self.min_query_length = Some(value);
		}
		if let Some(value) = cli.max_output_kib {
			self.max_output_kib = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		SearchResolution {
			tool: self.tool.unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL)),
			min_query_length: self.min_query_length.unwrap_or(DEFAULT_MIN_QUERY_LENGTH),
			max_output_kib: self
				.max_output_kib
				.unwrap_or(DEFAULT_MAX_OUTPUT_BYTES / 1024),
			debounce_ms: self.debounce_ms.unwrap_or(0),
		}
	}
}
