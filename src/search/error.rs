use std::io;

use thiserror::Error;

use super::record::ParseFailure;

/// Reasons a search run produced no (or only partial) results.
#[derive(Debug, Error)]
pub enum RunError {
	/// No workspace roots were available, so no process was started.
	#[error("no workspace roots to search")]
	ScopeEmpty,
	/// The tool could not be started.
	#[error("failed to start {tool}: {source}")]
	Spawn {
		tool: String,
		#[source]
		source: io::Error,
	},
	/// Reading the tool's output or waiting for it failed.
	#[error("i/o error while running the search tool: {0}")]
	Io(#[from] io::Error),
	/// The tool exited with a status other than "matches" or "no matches".
	#[error("search tool exited with {status}{}", stderr_suffix(.stderr))]
	ExitStatus { status: String, stderr: String },
	/// Standard output grew past the configured ceiling.
	#[error("search output exceeded {limit} bytes")]
	OutputTooLarge { limit: usize },
	/// A line of output could not be decoded.
	#[error("search output was malformed after {recovered} records: {failure}")]
	Parse {
		recovered: usize,
		#[source]
		failure: ParseFailure,
	},
}

impl RunError {
	/// Whether the run failed because the tool could not be invoked or
	/// misbehaved, as opposed to a scope or decoding problem.
	#[must_use]
	pub fn is_invocation_failure(&self) -> bool {
		matches!(
			self,
			Self::Spawn { .. } | Self::Io(_) | Self::ExitStatus { .. } | Self::OutputTooLarge { .. }
		)
	}
}

fn stderr_suffix(stderr: &str) -> String {
	let stderr = stderr.trim();
	if stderr.is_empty() {
		String::new()
	} else {
		format!(": {stderr}")
	}
}
