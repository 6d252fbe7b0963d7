use anyhow::Result;
use qsearch::search::{Location, group_by_file};
use qsearch::{SearchOutcome, SearchSelection};
use serde_json::json;

/// `path:line:column` with one-based line and column, as editors expect.
fn location_text(path: &std::path::Path, line: usize, column: usize) -> String {
	format!("{}:{}:{}", path.display(), line + 1, column + 1)
}

/// Format the search outcome as plain text, one location per line. Peek
/// locations are listed file by file.
pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	match &outcome.selection {
		None => format!("Search cancelled (query: '{}')", outcome.query),
		Some(SearchSelection::File { path, line, column }) => location_text(path, *line, *column),
		Some(SearchSelection::Peek { locations }) => group_by_file(locations)
			.into_iter()
			.flat_map(|(_, group)| group)
			.map(|location| {
				location_text(
					&location.path,
					location.range.start.line,
					location.range.start.column,
				)
			})
			.collect::<Vec<_>>()
			.join("\n"),
	}
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn location_json(location: &Location) -> serde_json::Value {
	json!({
		"line": location.range.start.line + 1,
		"column": location.range.start.column + 1,
		"end_column": location.range.end.column + 1,
	})
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(SearchSelection::File { path, line, column }) => json!({
			"type": "file",
			"path": path,
			"line": line + 1,
			"column": column + 1,
		}),
		Some(SearchSelection::Peek { locations }) => json!({
			"type": "peek",
			"files": group_by_file(locations)
				.into_iter()
				.map(|(path, group)| json!({
					"path": path,
					"locations": group.into_iter().map(location_json).collect::<Vec<_>>(),
				}))
				.collect::<Vec<_>>(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted(),
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use qsearch::search::{Position, Range};

	use super::*;

	fn location(path: &str, line: usize, column: usize, end: usize) -> Location {
		Location {
			path: PathBuf::from(path),
			range: Range {
				start: Position { line, column },
				end: Position { line, column: end },
			},
		}
	}

	#[test]
	fn plain_output_uses_one_based_positions() {
		let outcome = SearchOutcome {
			query: "needle".into(),
			selection: Some(SearchSelection::File {
				path: PathBuf::from("/a.txt"),
				line: 4,
				column: 2,
			}),
		};
		assert_eq!(format_outcome_plain(&outcome), "/a.txt:5:3");
	}

	#[test]
	fn plain_peek_output_lists_locations_file_by_file() {
		let outcome = SearchOutcome {
			query: "needle".into(),
			selection: Some(SearchSelection::Peek {
				locations: vec![
					location("/a", 0, 0, 1),
					location("/b", 9, 4, 6),
					location("/a", 3, 2, 5),
				],
			}),
		};
		assert_eq!(format_outcome_plain(&outcome), "/a:1:1\n/a:4:3\n/b:10:5");
	}

	#[test]
	fn json_output_marks_cancelled_searches() {
		let outcome = SearchOutcome {
			query: "abc".into(),
			selection: None,
		};
		let value: serde_json::Value =
			serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		assert_eq!(value["accepted"], false);
		assert_eq!(value["query"], "abc");
		assert!(value["selection"].is_null());
	}

	#[test]
	fn json_peek_output_nests_locations_by_file() {
		let outcome = SearchOutcome {
			query: "abc".into(),
			selection: Some(SearchSelection::Peek {
				locations: vec![
					location("/a", 2, 3, 7),
					location("/b", 0, 0, 1),
					location("/a", 5, 0, 2),
				],
			}),
		};
		let value: serde_json::Value =
			serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		let files = &value["selection"]["files"];
		assert_eq!(value["selection"]["type"], "peek");
		assert_eq!(files.as_array().unwrap().len(), 2);
		assert_eq!(files[0]["path"], "/a");
		assert_eq!(files[0]["locations"][0]["line"], 3);
		assert_eq!(files[0]["locations"][0]["end_column"], 8);
		assert_eq!(files[0]["locations"][1]["line"], 6);
		assert_eq!(files[1]["path"], "/b");
		assert_eq!(files[1]["locations"].as_array().unwrap().len(), 1);
	}
}
