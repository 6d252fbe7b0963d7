use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use qsearch::search::SearchScope;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};

/// `[workspace]` values as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct WorkspaceSection {
	pub(super) roots: Option<Vec<PathBuf>>,
}

impl WorkspaceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if !cli.paths.is_empty() {
			self.roots = Some(cli.paths.clone());
		}
	}

	/// Make every root absolute and canonical, defaulting to the working
	/// directory when none were given.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<Vec<PathBuf>> {
		let current_dir = env::current_dir().context("failed to determine working directory")?;
		let roots = match self.roots {
			Some(roots) if !roots.is_empty() => roots,
			_ => vec![current_dir.clone()],
		};

		let mut resolved = Vec::with_capacity(roots.len());
		for root in roots {
			let absolute = if root.is_relative() {
				current_dir.join(&root)
			} else {
				root.clone()
			};
			let canonical = fs::canonicalize(&absolute).map_err(|err| {
				ConfigError::invalid(
					"workspace.roots",
					root.display().to_string(),
					sources.source_for_roots(),
					format!("cannot be resolved: {err}"),
				)
			})?;
			resolved.push(canonical);
		}

		Ok(SearchScope::new(resolved).into_roots())
	}
}
