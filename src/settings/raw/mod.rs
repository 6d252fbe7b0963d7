use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::default_title_for;

mod search;
mod ui;
mod workspace;

use search::SearchSection;
use ui::UiSection;
use workspace::WorkspaceSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	workspace: WorkspaceSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.workspace.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			min_query_length: detect_source(
				cli.min_query_length.is_some(),
				self.search.min_query_length.is_some(),
				"QSEARCH__SEARCH__MIN_QUERY_LENGTH",
				"--min-query-length",
				"search.min_query_length",
			),
			max_output_kib: detect_source(
				cli.max_output_kib.is_some(),
				self.search.max_output_kib.is_some(),
				"QSEARCH__SEARCH__MAX_OUTPUT_KIB",
				"--max-output-kib",
				"search.max_output_kib",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"QSEARCH__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			roots: detect_source(
				!cli.paths.is_empty(),
				self.workspace.roots.is_some(),
				"QSEARCH__WORKSPACE__ROOTS",
				"PATH",
				"workspace.roots",
			),
		};

		let search = self.search.finalize();
		let roots = self.workspace.resolve(&sources)?;
		let default_title = roots
			.first()
			.map(|root| default_title_for(root))
			.unwrap_or_default();
		let ui = self.ui.finalize(default_title);

		let config = ResolvedConfig {
			roots,
			tool: search.tool,
			min_query_length: search.min_query_length,
			max_output_kib: search.max_output_kib,
			debounce_ms: search.debounce_ms,
			title: ui.title,
			initial_query: ui.initial_query,
			peek_entry: ui.peek_entry,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
