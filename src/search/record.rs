//! Decoding of the search tool's line-delimited JSON output.
//!
//! Every line of `rg --json` output is a self-contained record tagged with a
//! `type` field. Only `match` records become [`MatchRecord`]s; `begin`, `end`,
//! `context` and `summary` records are skipped.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One located match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
	/// Path of the matched file as reported by the tool.
	pub path: PathBuf,
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based byte offset where the first submatch starts.
	pub column: usize,
	/// Byte offset where the first submatch ends.
	pub end_column: usize,
	/// Short name shown in the result list.
	pub label: String,
	/// `line_number: text` with the line terminator removed.
	pub preview: String,
}

/// Matches produced by one completed search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
	pub matches: Vec<MatchRecord>,
	/// Matches dropped because the tool reported their text as raw bytes.
	pub hidden: usize,
}

impl ResultSet {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.matches.len()
	}
}

/// Result of decoding a single, well-formed output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
	Match(MatchRecord),
	/// A non-match record, or a match missing required fields.
	Skip,
	/// A match whose path or line text was not valid UTF-8.
	Binary,
}

/// A line that could not be decoded as JSON.
#[derive(Debug, Error)]
#[error("malformed search record: {0}")]
pub struct RecordError(#[from] serde_json::Error);

/// Where and why decoding of a run's output stopped early.
#[derive(Debug, Error)]
#[error("output line {line}: {error}")]
pub struct ParseFailure {
	/// One-based line number within the run's output.
	pub line: usize,
	#[source]
	pub error: RecordError,
}

/// Records recovered from a run's output.
#[derive(Debug, Default)]
pub struct ParseReport {
	pub results: ResultSet,
	/// Set when a malformed line halted decoding.
	pub failure: Option<ParseFailure>,
}

#[derive(Deserialize)]
struct RawRecord {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	data: serde_json::Value,
}

#[derive(Deserialize)]
struct RawMatch {
	path: Option<RawText>,
	lines: Option<RawText>,
	line_number: Option<u64>,
	#[serde(default)]
	submatches: Vec<RawSubmatch>,
}

/// Either `{"text": ..}` or, for non UTF-8 content, `{"bytes": ..}`.
#[derive(Deserialize)]
struct RawText {
	text: Option<String>,
	bytes: Option<String>,
}

#[derive(Deserialize)]
struct RawSubmatch {
	start: usize,
	end: usize,
}

/// Converts output lines into match records, labelling paths relative to the
/// search roots.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
	roots: Vec<PathBuf>,
}

impl RecordParser {
	#[must_use]
	pub fn new(roots: Vec<PathBuf>) -> Self {
		Self { roots }
	}

	/// Decode one line of output.
	pub fn parse_line(&self, line: &str) -> Result<ParsedLine, RecordError> {
		let record: RawRecord = serde_json::from_str(line)?;
		if record.kind != "match" {
			return Ok(ParsedLine::Skip);
		}
		let Ok(data) = serde_json::from_value::<RawMatch>(record.data) else {
			log::debug!("dropping match record with unexpected shape");
			return Ok(ParsedLine::Skip);
		};
		Ok(self.build(data))
	}

	/// Decode a full run's output, stopping at the first malformed line.
	#[must_use]
	pub fn parse_output(&self, output: &str) -> ParseReport {
		let mut report = ParseReport::default();
		for (index, line) in output.lines().enumerate() {
			if line.trim().is_empty() {
				continue;
			}
			match self.parse_line(line) {
				Ok(ParsedLine::Match(record)) => report.results.matches.push(record),
				Ok(ParsedLine::Skip) => {}
				Ok(ParsedLine::Binary) => report.results.hidden += 1,
				Err(error) => {
					report.failure = Some(ParseFailure {
						line: index + 1,
						error,
					});
					break;
				}
			}
		}
		report
	}

	fn build(&self, data: RawMatch) -> ParsedLine {
		let (Some(path), Some(lines)) = (data.path, data.lines) else {
			return ParsedLine::Skip;
		};
		let (Some(path), Some(text)) = (path.text, lines.text) else {
			if path.bytes.is_some() || lines.bytes.is_some() {
				return ParsedLine::Binary;
			}
			return ParsedLine::Skip;
		};
		let (Some(line_number), Some(first)) = (data.line_number, data.submatches.first()) else {
			return ParsedLine::Skip;
		};
		let Some(line) = usize::try_from(line_number).ok().and_then(|n| n.checked_sub(1)) else {
			return ParsedLine::Skip;
		};

		let path = PathBuf::from(path);
		let label = self.label_for(&path);
		let text = text.trim_end_matches(['\n', '\r']);
		ParsedLine::Match(MatchRecord {
			label,
			preview: format!("{line_number}: {text}"),
			path,
			line,
			column: first.start,
			end_column: first.end,
		})
	}

	fn label_for(&self, path: &Path) -> String {
		self.roots
			.iter()
			.find_map(|root| path.strip_prefix(root).ok())
			.filter(|relative| !relative.as_os_str().is_empty())
			.unwrap_or(path)
			.display()
			.to_string()
	}
}

/// Decode one line without root-relative labelling.
pub fn parse_line(line: &str) -> Result<ParsedLine, RecordError> {
	RecordParser::default().parse_line(line)
}
