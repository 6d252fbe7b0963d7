//! Grouping of a finished result set into locations for the peek view.

use std::path::{Path, PathBuf};

use super::record::MatchRecord;

/// Zero-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

/// Span between two positions on the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
	pub start: Position,
	pub end: Position,
}

/// One match expressed as a file and range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub path: PathBuf,
	pub range: Range,
}

impl From<&MatchRecord> for Location {
	fn from(record: &MatchRecord) -> Self {
		Self {
			path: record.path.clone(),
			range: Range {
				start: Position {
					line: record.line,
					column: record.column,
				},
				end: Position {
					line: record.line,
					column: record.end_column,
				},
			},
		}
	}
}

/// Outcome of aggregating a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeekResult {
	/// Nothing to show; the view reports this instead of an empty list.
	NoResults,
	Locations(Vec<Location>),
}

impl PeekResult {
	/// Location that anchors the peek view.
	#[must_use]
	pub fn anchor(&self) -> Option<&Location> {
		match self {
			Self::NoResults => None,
			Self::Locations(locations) => locations.first(),
		}
	}
}

/// Group `locations` by file. Files keep their first-seen order and each
/// file's locations keep their relative order.
#[must_use]
pub fn group_by_file(locations: &[Location]) -> Vec<(&Path, Vec<&Location>)> {
	let mut groups: Vec<(&Path, Vec<&Location>)> = Vec::new();
	for location in locations {
		match groups
			.iter_mut()
			.find(|(path, _)| *path == location.path.as_path())
		{
			Some((_, entries)) => entries.push(location),
			None => groups.push((location.path.as_path(), vec![location])),
		}
	}
	groups
}

/// Build one location per match, preserving order.
#[must_use]
pub fn aggregate(matches: &[MatchRecord]) -> PeekResult {
	if matches.is_empty() {
		return PeekResult::NoResults;
	}
	PeekResult::Locations(matches.iter().map(Location::from).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(path: &str, line: usize, column: usize, end_column: usize) -> MatchRecord {
		MatchRecord {
			path: PathBuf::from(path),
			line,
			column,
			end_column,
			label: path.to_string(),
			preview: String::new(),
		}
	}

	#[test]
	fn empty_input_signals_no_results() {
		let result = aggregate(&[]);
		assert_eq!(result, PeekResult::NoResults);
		assert!(result.anchor().is_none());
	}

	#[test]
	fn single_match_becomes_single_location() {
		let result = aggregate(&[record("/a.txt", 4, 2, 7)]);
		let PeekResult::Locations(locations) = &result else {
			panic!("expected locations");
		};
		assert_eq!(locations.len(), 1);
		assert_eq!(locations[0].path, PathBuf::from("/a.txt"));
		assert_eq!(locations[0].range.start, Position { line: 4, column: 2 });
		assert_eq!(locations[0].range.end, Position { line: 4, column: 7 });
		assert_eq!(result.anchor(), Some(&locations[0]));
	}

	#[test]
	fn grouping_keeps_first_seen_file_order() {
		let result = aggregate(&[
			record("/b.rs", 1, 0, 1),
			record("/a.rs", 2, 0, 1),
			record("/b.rs", 9, 3, 4),
		]);
		let PeekResult::Locations(locations) = &result else {
			panic!("expected locations");
		};
		let groups = group_by_file(locations);
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].0, Path::new("/b.rs"));
		assert_eq!(groups[0].1.len(), 2);
		assert_eq!(groups[1].0, Path::new("/a.rs"));
	}
}
