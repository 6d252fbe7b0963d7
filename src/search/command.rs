use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::query::Query;

use super::scope::SearchScope;

/// Exit status the tool uses when it ran successfully but found nothing.
pub(crate) const NO_MATCHES_EXIT_CODE: i32 = 1;

/// Arguments for one invocation, excluding the program itself.
///
/// Symlinks are followed, ignore files and hidden-file filtering are disabled
/// (`-uu`), and output is requested as JSON lines. The pattern is passed with
/// `-e` so that queries starting with `-` are not mistaken for flags.
pub(crate) fn search_args(query: &Query, scope: &SearchScope) -> Vec<OsString> {
	let mut args: Vec<OsString> = ["-L", "-uu", "--json", "-e"]
		.into_iter()
		.map(OsString::from)
		.collect();
	args.push(query.as_str().into());
	args.push("--".into());
	args.extend(scope.roots().iter().map(|root| root.as_os_str().to_owned()));
	args
}

/// Build the process for `query` with piped output streams.
pub(crate) fn search_command(tool: &Path, query: &Query, scope: &SearchScope) -> Command {
	let mut command = Command::new(tool);
	command
		.args(search_args(query, scope))
		.stdin(Stdio::null())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped());
	command
}
