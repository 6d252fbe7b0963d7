use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"qsearch",
		"--tool",
		"/opt/rg",
		"--min-query-length",
		"4",
		"--max-output-kib",
		"64",
		"--debounce-ms",
		"120",
		"--title",
		"title",
		"--initial-query",
		"query",
		"--peek-entry",
		"off",
		"/tmp",
	]);

	let mut config = RawConfig::default();
	config.search.min_query_length = Some(9);
	config.ui.title = Some("from file".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.search.tool, Some(PathBuf::from("/opt/rg")));
	assert_eq!(config.search.min_query_length, Some(4));
	assert_eq!(config.search.max_output_kib, Some(64));
	assert_eq!(config.search.debounce_ms, Some(120));
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.peek_entry, Some(false));
	assert_eq!(config.workspace.roots, Some(vec![PathBuf::from("/tmp")]));
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["qsearch"]);
	let mut config = RawConfig::default();
	config.search.debounce_ms = Some(50);
	config.workspace.roots = Some(vec![PathBuf::from("/srv")]);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.search.debounce_ms, Some(50));
	assert_eq!(config.workspace.roots, Some(vec![PathBuf::from("/srv")]));
}

#[test]
fn resolve_fills_defaults_and_canonicalizes_roots() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path().to_str().unwrap().to_string();
	let cli = CliArgs::parse_from(["qsearch", root.as_str(), root.as_str()]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();

	let canonical = dir.path().canonicalize().unwrap();
	assert_eq!(resolved.roots, vec![canonical]);
	assert_eq!(resolved.tool, PathBuf::from("rg"));
	assert_eq!(resolved.min_query_length, 3);
	assert_eq!(resolved.debounce_ms, 0);
	assert!(resolved.peek_entry);
	assert!(!resolved.title.is_empty());
}

#[test]
fn resolve_rejects_missing_roots() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing");
	let missing = missing.to_str().unwrap().to_string();
	let cli = CliArgs::parse_from(["qsearch", missing.as_str()]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("workspace.roots"));
	assert!(message.contains("CLI flag `PATH`"));
}

#[test]
fn resolve_rejects_zero_min_query_length() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path().to_str().unwrap().to_string();
	let cli = CliArgs::parse_from(["qsearch", "-m", "0", root.as_str()]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("search.min_query_length"));
}
