use std::path::Path;

use super::peek::{Location, Position};
use super::record::MatchRecord;

/// One row of the rendered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
	/// Synthetic first row that opens every match in the peek view.
	Peek { count: usize },
	Match(MatchRecord),
}

impl ListEntry {
	#[must_use]
	pub fn as_match(&self) -> Option<&MatchRecord> {
		match self {
			Self::Peek { .. } => None,
			Self::Match(record) => Some(record),
		}
	}
}

/// Consumer responsible for presenting session state.
pub trait ResultView {
	/// Replace the rendered list.
	fn render(&mut self, entries: &[ListEntry]);

	/// Toggle the in-progress indicator.
	fn set_busy(&mut self, busy: bool);

	fn show(&mut self);

	fn hide(&mut self);

	/// Tell the user that a peek request had nothing to show.
	fn show_no_results(&mut self);

	/// Number of matches left out of the last render because their content was
	/// not valid UTF-8.
	fn set_hidden_count(&mut self, _hidden: usize) {}
}

/// Opens accepted selections.
pub trait FileOpener {
	/// Open `path` with the cursor at the zero-based `line` and `column`.
	fn open(&mut self, path: &Path, line: usize, column: usize);

	/// Show `locations` in an aggregate view anchored at `anchor`.
	fn open_peek(&mut self, anchor: &Path, position: Position, locations: &[Location]);
}
