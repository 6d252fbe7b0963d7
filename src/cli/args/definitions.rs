use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `qsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "qsearch",
	version,
	long_version = long_version(),
	about = "Search file contents interactively as you type, powered by ripgrep",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "PATH",
		help = "Directories to search (default: current directory)"
	)]
	pub(crate) paths: Vec<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "PROGRAM",
		help = "Search tool to invoke (default: rg)"
	)]
	pub(crate) tool: Option<PathBuf>,
	#[arg(
		short = 'm',
		long = "min-query-length",
		value_name = "NUM",
		help = "Minimum query length before searching (default: 3)"
	)]
	pub(crate) min_query_length: Option<usize>,
	#[arg(
		long = "max-output-kib",
		value_name = "KIB",
		help = "Largest search output accepted per run, in KiB (default: 8192)"
	)]
	pub(crate) max_output_kib: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Wait this long after the last keystroke before searching (default: 0)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: name of the first search root)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "peek-entry",
		value_parser = BoolishValueParser::new(),
		help = "Offer an entry that opens all results at once (default: enabled)"
	)]
	pub(crate) peek_entry: Option<bool>,
	#[arg(
		long = "log-level",
		value_enum,
		env = "QSEARCH_LOG",
		help = "Verbosity of the log file (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
