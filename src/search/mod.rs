//! Incremental search against an external line-matching tool.
//!
//! [`SearchSession`] is the entry point: it receives prompt edits, starts and
//! cancels runs through a [`SearchLauncher`] (normally [`ProcessRunner`]),
//! decodes their output with [`RecordParser`] and hands the resulting rows to a
//! [`ResultView`].

mod command;
mod config;
mod error;
pub mod peek;
pub mod record;
mod runner;
mod scope;
mod session;
mod view;

pub use config::{DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_TOOL, SessionConfig};
pub use error::RunError;
pub use peek::{Location, PeekResult, Position, Range, aggregate, group_by_file};
pub use record::{MatchRecord, ParsedLine, RecordParser, ResultSet, parse_line};
pub use runner::{
	ProcessRunner, RunCompletion, RunControl, RunHandle, RunId, RunOutput, SearchLauncher,
};
pub use scope::{DirectoryRoots, SearchScope, WorkspaceRoots};
pub use session::{SearchSession, SessionPhase};
pub use view::{FileOpener, ListEntry, ResultView};
