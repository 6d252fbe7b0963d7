use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) peek_entry: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) title: String,
	pub(super) initial_query: String,
	pub(super) peek_entry: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(value) = cli.peek_entry {
			self.peek_entry = Some(value);
		}
	}

	pub(super) fn finalize(self, default_title: String) -> UiResolution {
		let title = self
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.unwrap_or(default_title);

		UiResolution {
			title,
			initial_query: self.initial_query.unwrap_or_default(),
			peek_entry: self.peek_entry.unwrap_or(true),
		}
	}
}
