use std::path::{Path, PathBuf};

use crate::search::{FileOpener, Location, Position};

/// What the user picked before the picker closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSelection {
	/// A single match. `line` and `column` are zero-based.
	File {
		path: PathBuf,
		line: usize,
		column: usize,
	},
	/// Every match of the last search, first location first.
	Peek { locations: Vec<Location> },
}

/// Result of one picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// Prompt text at the time the picker closed.
	pub query: String,
	/// `None` when the user cancelled.
	pub selection: Option<SearchSelection>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(&self) -> bool {
		self.selection.is_some()
	}
}

/// [`FileOpener`] that remembers the last request instead of opening an
/// editor; the binary prints it once the terminal is restored.
#[derive(Debug, Default)]
pub struct OutcomeRecorder {
	selection: Option<SearchSelection>,
}

impl OutcomeRecorder {
	/// Remove the recorded selection, if any.
	pub fn take(&mut self) -> Option<SearchSelection> {
		self.selection.take()
	}
}

impl FileOpener for OutcomeRecorder {
	fn open(&mut self, path: &Path, line: usize, column: usize) {
		log::info!("opening {}:{}:{}", path.display(), line + 1, column + 1);
		self.selection = Some(SearchSelection::File {
			path: path.to_path_buf(),
			line,
			column,
		});
	}

	fn open_peek(&mut self, anchor: &Path, position: Position, locations: &[Location]) {
		log::info!(
			"peeking {} locations from {}:{}",
			locations.len(),
			anchor.display(),
			position.line + 1
		);
		self.selection = Some(SearchSelection::Peek {
			locations: locations.to_vec(),
		});
	}
}
