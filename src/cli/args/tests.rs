use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::CliArgs;
use super::options::{LogLevelArg, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::parse_from(["qsearch"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.paths.is_empty());
	assert!(parsed.peek_entry.is_none());
}

#[test]
fn positional_paths_and_flags_are_parsed() {
	let parsed = CliArgs::parse_from([
		"qsearch",
		"--min-query-length",
		"2",
		"--peek-entry",
		"false",
		"--log-level",
		"debug",
		"-o",
		"json",
		"src",
		"tests",
	]);
	assert_eq!(parsed.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
	assert_eq!(parsed.min_query_length, Some(2));
	assert_eq!(parsed.peek_entry, Some(false));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}
