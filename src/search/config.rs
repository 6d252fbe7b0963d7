use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TOOL: &str = "rg";
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 3;
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 8 * 1024 * 1024;

/// Tunables handed to a [`SearchSession`](super::SearchSession) at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
	/// Program invoked for each run.
	pub tool: PathBuf,
	/// Queries shorter than this (in characters) never start a run.
	pub min_query_length: usize,
	/// Ceiling on buffered standard output per run.
	pub max_output_bytes: usize,
	/// Delay between the last query change and the run it triggers.
	pub debounce: Duration,
	/// Prepend the peek entry to non-empty result lists.
	pub peek_entry: bool,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			tool: PathBuf::from(DEFAULT_TOOL),
			min_query_length: DEFAULT_MIN_QUERY_LENGTH,
			max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
			debounce: Duration::ZERO,
			peek_entry: true,
		}
	}
}
