//! Translate free-form prompt text into the pattern handed to the search tool.

use std::fmt;

/// Pattern inserted between user-typed words so that any run of characters,
/// including none, may separate them on the matched line.
pub const WILDCARD_GAP: &str = ".*";

/// Normalized, search-ready pattern derived from raw user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
	/// The pattern passed to the search tool.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Length of the pattern in characters.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.chars().count()
	}

	/// Whether the pattern is too short to be worth a search run.
	#[must_use]
	pub fn is_too_short(&self, min_len: usize) -> bool {
		self.len() < min_len
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Split `raw` on whitespace and rejoin the words with [`WILDCARD_GAP`].
#[must_use]
pub fn normalize(raw: &str) -> Query {
	let tokens: Vec<&str> = raw
		.split_whitespace()
		.map(str::trim)
		.filter(|token| !token.is_empty())
		.collect();
	Query(tokens.join(WILDCARD_GAP))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_words_with_wildcard_gap() {
		assert_eq!(normalize("foo bar").as_str(), "foo.*bar");
		assert_eq!(normalize("  foo \t  bar\nbaz ").as_str(), "foo.*bar.*baz");
	}

	#[test]
	fn whitespace_variants_normalize_to_the_same_query() {
		assert_eq!(normalize("foo bar"), normalize(" foo   bar "));
		assert_ne!(normalize("foo bar"), normalize("foobar"));
	}

	#[test]
	fn empty_input_is_always_too_short() {
		let query = normalize("   ");
		assert!(query.is_empty());
		assert!(query.is_too_short(1));
	}

	#[test]
	fn length_counts_characters_not_bytes() {
		let query = normalize("äöü");
		assert_eq!(query.len(), 3);
		assert!(!query.is_too_short(3));
		assert!(normalize("ab").is_too_short(3));
	}
}
