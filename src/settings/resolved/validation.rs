use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted debounce interval.
const MAX_DEBOUNCE_MS: u64 = 5_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.min_query_length == 0 {
		return Err(ConfigError::invalid(
			"search.min_query_length",
			config.min_query_length.to_string(),
			sources.source_for_min_query_length(),
			"must be at least 1",
		));
	}

	if config.max_output_kib == 0 {
		return Err(ConfigError::invalid(
			"search.max_output_kib",
			config.max_output_kib.to_string(),
			sources.source_for_max_output_kib(),
			"must be greater than zero",
		));
	}

	if config.debounce_ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce_ms.to_string(),
			sources.source_for_debounce_ms(),
			format!("must not exceed {MAX_DEBOUNCE_MS}"),
		));
	}

	if let Some(root) = config.roots.iter().find(|root| !root.is_dir()) {
		return Err(ConfigError::invalid(
			"workspace.roots",
			root.display().to_string(),
			sources.source_for_roots(),
			"must be a directory",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			roots: vec![std::env::temp_dir()],
			tool: PathBuf::from("rg"),
			min_query_length: 3,
			max_output_kib: 1024,
			debounce_ms: 0,
			title: "tmp".into(),
			initial_query: String::new(),
			peek_entry: true,
		}
	}

	#[test]
	fn defaults_pass_validation() {
		validate(&config(), &ConfigSources::default()).unwrap();
	}

	#[test]
	fn validation_rejects_zero_max_output() {
		let config = ResolvedConfig {
			max_output_kib: 0,
			..config()
		};
		let sources = ConfigSources {
			max_output_kib: Some(SettingSource::CliFlag("--max-output-kib")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.max_output_kib");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let config = ResolvedConfig {
			debounce_ms: 60_000,
			..config()
		};
		let sources = ConfigSources {
			debounce_ms: Some(SettingSource::Environment("QSEARCH__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.debounce_ms");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_file_roots() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let config = ResolvedConfig {
			roots: vec![file.path().to_path_buf()],
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "workspace.roots");
		assert!(err.to_string().contains("built-in default"));
	}
}
