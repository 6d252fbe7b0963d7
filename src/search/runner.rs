//! Ownership of the external search process.
//!
//! Each run gets its own worker thread that drains the process output, reaps
//! the child and reports a [`RunCompletion`] over an [`mpsc`] channel. The
//! [`RunHandle`] returned to the caller can cancel the run at any time without
//! blocking on the process.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, ChildStderr, ChildStdout, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use crate::query::Query;

use super::command::{NO_MATCHES_EXIT_CODE, search_command};
use super::error::RunError;
use super::scope::SearchScope;

/// Identifier correlating a completion with the run that produced it.
pub type RunId = u64;

const STDERR_LIMIT: usize = 16 * 1024;
const REAP_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Everything a finished process wrote, plus how it exited.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
	pub stdout: String,
	pub stderr: String,
	/// `None` when the process was terminated by a signal.
	pub exit_code: Option<i32>,
}

impl RunOutput {
	/// Exit codes `0` (matches) and `1` (no matches) are both successful.
	#[must_use]
	pub fn succeeded(&self) -> bool {
		matches!(self.exit_code, Some(0 | NO_MATCHES_EXIT_CODE))
	}

	/// Describe an unsuccessful exit as a [`RunError`].
	#[must_use]
	pub fn status_error(&self) -> Option<RunError> {
		if self.succeeded() {
			return None;
		}
		let status = match self.exit_code {
			Some(code) => format!("exit code {code}"),
			None => "a signal".to_string(),
		};
		Some(RunError::ExitStatus {
			status,
			stderr: self.stderr.clone(),
		})
	}
}

/// Message delivered when a run stops, successfully or not.
#[derive(Debug)]
pub struct RunCompletion {
	pub id: RunId,
	pub outcome: Result<RunOutput, RunError>,
}

/// Cancellation hook behind a [`RunHandle`].
pub trait RunControl: Send + Sync {
	/// Request termination. Must be idempotent and must not block on the
	/// process exiting.
	fn cancel(&self);
}

/// Caller-side handle for one search run.
pub struct RunHandle {
	id: RunId,
	control: Option<Arc<dyn RunControl>>,
	cancelled: bool,
}

impl RunHandle {
	/// Wrap a live run.
	#[must_use]
	pub fn new(id: RunId, control: Arc<dyn RunControl>) -> Self {
		Self {
			id,
			control: Some(control),
			cancelled: false,
		}
	}

	/// A handle for a run that never started a process.
	#[must_use]
	pub fn finished(id: RunId) -> Self {
		Self {
			id,
			control: None,
			cancelled: false,
		}
	}

	#[must_use]
	pub fn id(&self) -> RunId {
		self.id
	}

	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.cancelled
	}

	/// Stop the run. Safe to call repeatedly and on runs that already ended.
	pub fn cancel(&mut self) {
		if self.cancelled {
			return;
		}
		self.cancelled = true;
		if let Some(control) = self.control.take() {
			control.cancel();
		}
	}
}

impl std::fmt::Debug for RunHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RunHandle")
			.field("id", &self.id)
			.field("live", &self.control.is_some())
			.field("cancelled", &self.cancelled)
			.finish()
	}
}

/// Starts search runs on behalf of a session.
pub trait SearchLauncher {
	fn launch(&mut self, id: RunId, query: &Query, scope: &SearchScope) -> RunHandle;
}

/// Runs the search tool as a child process.
pub struct ProcessRunner {
	tool: PathBuf,
	max_output_bytes: usize,
	completions: Sender<RunCompletion>,
}

impl ProcessRunner {
	#[must_use]
	pub fn new(tool: PathBuf, max_output_bytes: usize, completions: Sender<RunCompletion>) -> Self {
		Self {
			tool,
			max_output_bytes,
			completions,
		}
	}

	/// Start a run for `query` restricted to `scope`.
	///
	/// An empty scope never spawns a process; the completion is delivered
	/// before this returns. Spawn failures are reported the same way.
	pub fn start(&self, id: RunId, query: &Query, scope: &SearchScope) -> RunHandle {
		if scope.is_empty() {
			self.complete(id, Err(RunError::ScopeEmpty));
			return RunHandle::finished(id);
		}

		let mut child = match search_command(&self.tool, query, scope).spawn() {
			Ok(child) => child,
			Err(source) => {
				self.complete(
					id,
					Err(RunError::Spawn {
						tool: self.tool.display().to_string(),
						source,
					}),
				);
				return RunHandle::finished(id);
			}
		};
		log::debug!("run {id}: started pid {} for {query:?}", child.id());

		let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
			let _ = child.kill();
			let _ = child.wait();
			self.complete(
				id,
				Err(RunError::Io(io::Error::other("child output streams were not captured"))),
			);
			return RunHandle::finished(id);
		};

		let control = Arc::new(ProcessControl::new(child));
		let worker_control = Arc::clone(&control);
		let completions = self.completions.clone();
		let limit = self.max_output_bytes;
		thread::spawn(move || {
			let outcome = drain(&worker_control, stdout, stderr, limit);
			worker_control.mark_finished();
			if worker_control.is_cancelled() {
				log::debug!("run {id}: cancelled, discarding output");
				return;
			}
			let _ = completions.send(RunCompletion { id, outcome });
		});

		RunHandle::new(id, control)
	}

	fn complete(&self, id: RunId, outcome: Result<RunOutput, RunError>) {
		let _ = self.completions.send(RunCompletion { id, outcome });
	}
}

impl SearchLauncher for ProcessRunner {
	fn launch(&mut self, id: RunId, query: &Query, scope: &SearchScope) -> RunHandle {
		self.start(id, query, scope)
	}
}

struct ProcessControl {
	child: Mutex<Child>,
	cancelled: AtomicBool,
	finished: AtomicBool,
}

impl ProcessControl {
	fn new(child: Child) -> Self {
		Self {
			child: Mutex::new(child),
			cancelled: AtomicBool::new(false),
			finished: AtomicBool::new(false),
		}
	}

	fn child(&self) -> MutexGuard<'_, Child> {
		self.child.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Acquire)
	}

	fn mark_finished(&self) {
		self.finished.store(true, Ordering::Release);
	}

	fn kill(&self) {
		// Fails with InvalidInput once the child has been reaped.
		let _ = self.child().kill();
	}

	/// Reap the child without holding the lock across the wait, so that
	/// `cancel` never blocks behind it.
	fn wait(&self) -> io::Result<ExitStatus> {
		loop {
			if let Some(status) = self.child().try_wait()? {
				return Ok(status);
			}
			thread::sleep(REAP_POLL_INTERVAL);
		}
	}
}

impl RunControl for ProcessControl {
	fn cancel(&self) {
		if self.cancelled.swap(true, Ordering::AcqRel) {
			return;
		}
		if !self.finished.load(Ordering::Acquire) {
			self.kill();
		}
	}
}

fn drain(
	control: &ProcessControl,
	stdout: ChildStdout,
	stderr: ChildStderr,
	limit: usize,
) -> Result<RunOutput, RunError> {
	let stderr_reader = thread::spawn(move || read_stderr(stderr));

	let captured = read_bounded(stdout, limit);
	if !matches!(captured, Ok(Some(_))) {
		control.kill();
	}
	let status = control.wait();
	let stderr = stderr_reader.join().unwrap_or_default();

	let stdout = captured?.ok_or(RunError::OutputTooLarge { limit })?;
	let status = status?;
	Ok(RunOutput {
		stdout: String::from_utf8_lossy(&stdout).into_owned(),
		stderr,
		exit_code: status.code(),
	})
}

/// Read until EOF, returning `None` if more than `limit` bytes arrive.
fn read_bounded(reader: impl Read, limit: usize) -> io::Result<Option<Vec<u8>>> {
	let mut buffer = Vec::new();
	let ceiling = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
	reader.take(ceiling).read_to_end(&mut buffer)?;
	if buffer.len() > limit {
		return Ok(None);
	}
	Ok(Some(buffer))
}

fn read_stderr(mut stderr: ChildStderr) -> String {
	let mut buffer = Vec::new();
	let _ = stderr.by_ref().take(STDERR_LIMIT as u64).read_to_end(&mut buffer);
	// Keep draining so the child never blocks on a full pipe.
	let _ = io::copy(&mut stderr, &mut io::sink());
	String::from_utf8_lossy(&buffer).into_owned()
}
