use clap::ValueEnum;
use log::LevelFilter;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Verbosity of the log file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevelArg> for LevelFilter {
	fn from(level: LogLevelArg) -> Self {
		match level {
			LogLevelArg::Off => LevelFilter::Off,
			LogLevelArg::Error => LevelFilter::Error,
			LogLevelArg::Warn => LevelFilter::Warn,
			LogLevelArg::Info => LevelFilter::Info,
			LogLevelArg::Debug => LevelFilter::Debug,
			LogLevelArg::Trace => LevelFilter::Trace,
		}
	}
}
