//! The search session: turns query edits into search runs and run
//! completions into rendered results.
//!
//! All transitions happen on the caller's thread through `&mut self` methods.
//! Worker threads only ever send [`RunCompletion`] messages, which the session
//! drains in [`SearchSession::pump`] and applies when their run id still
//! matches the live run.

use std::mem;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use crate::query::{Query, normalize};

use super::config::SessionConfig;
use super::error::RunError;
use super::peek::{PeekResult, aggregate};
use super::record::{RecordParser, ResultSet};
use super::runner::{RunCompletion, RunHandle, RunId, SearchLauncher};
use super::scope::{SearchScope, WorkspaceRoots};
use super::view::{FileOpener, ListEntry, ResultView};

/// Externally observable phase of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	Idle,
	Debounced,
	Searching,
	Presenting,
	Disposed,
}

enum SessionState {
	Idle,
	Debounced { query: Query, due: Instant },
	Searching { run: RunHandle, roots: Vec<PathBuf> },
	Presenting { results: ResultSet },
	Disposed,
}

/// Controller for one interactive search prompt.
pub struct SearchSession<L, V, O>
where
	L: SearchLauncher,
	V: ResultView,
	O: FileOpener,
{
	config: SessionConfig,
	launcher: L,
	completions: Receiver<RunCompletion>,
	roots: Box<dyn WorkspaceRoots>,
	view: V,
	opener: O,
	state: SessionState,
	/// Last normalized query, used to suppress redundant searches.
	query: Query,
	entries: Vec<ListEntry>,
	next_run_id: RunId,
}

impl<L, V, O> SearchSession<L, V, O>
where
	L: SearchLauncher,
	V: ResultView,
	O: FileOpener,
{
	/// Create an idle session. `completions` must be the receiving end of the
	/// channel `launcher` reports to.
	pub fn new(
		config: SessionConfig,
		launcher: L,
		completions: Receiver<RunCompletion>,
		roots: Box<dyn WorkspaceRoots>,
		view: V,
		opener: O,
	) -> Self {
		Self {
			config,
			launcher,
			completions,
			roots,
			view,
			opener,
			state: SessionState::Idle,
			query: Query::default(),
			entries: Vec::new(),
			next_run_id: 0,
		}
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		match self.state {
			SessionState::Idle => SessionPhase::Idle,
			SessionState::Debounced { .. } => SessionPhase::Debounced,
			SessionState::Searching { .. } => SessionPhase::Searching,
			SessionState::Presenting { .. } => SessionPhase::Presenting,
			SessionState::Disposed => SessionPhase::Disposed,
		}
	}

	#[must_use]
	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// The last normalized query.
	#[must_use]
	pub fn query(&self) -> &Query {
		&self.query
	}

	/// Rows most recently handed to the view.
	#[must_use]
	pub fn entries(&self) -> &[ListEntry] {
		&self.entries
	}

	/// Results being presented, if any.
	#[must_use]
	pub fn results(&self) -> Option<&ResultSet> {
		match &self.state {
			SessionState::Presenting { results } => Some(results),
			_ => None,
		}
	}

	/// Identifier of the live run, if one is in flight.
	#[must_use]
	pub fn live_run(&self) -> Option<RunId> {
		match &self.state {
			SessionState::Searching { run, .. } => Some(run.id()),
			_ => None,
		}
	}

	#[must_use]
	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut V {
		&mut self.view
	}

	#[must_use]
	pub fn opener(&self) -> &O {
		&self.opener
	}

	pub fn opener_mut(&mut self) -> &mut O {
		&mut self.opener
	}

	#[must_use]
	pub fn is_disposed(&self) -> bool {
		matches!(self.state, SessionState::Disposed)
	}

	/// Bring the prompt up.
	pub fn show(&mut self) {
		if self.is_disposed() {
			return;
		}
		self.view.show();
	}

	/// React to an edit of the prompt text.
	///
	/// A query that normalizes to the previous one is ignored. Otherwise the
	/// live run, if any, is cancelled and a new run is dispatched, either now
	/// or once the debounce interval has passed.
	pub fn query_changed(&mut self, raw: &str) {
		self.query_changed_at(raw, Instant::now());
	}

	fn query_changed_at(&mut self, raw: &str, now: Instant) {
		if self.is_disposed() {
			log::debug!("ignoring query change on a disposed session");
			return;
		}
		let query = normalize(raw);
		if query == self.query {
			log::debug!("query unchanged ({query:?}), not searching");
			return;
		}
		self.query = query.clone();

		if self.config.debounce.is_zero() {
			self.dispatch(query);
		} else {
			self.cancel_live_run();
			self.state = SessionState::Debounced {
				query,
				due: now + self.config.debounce,
			};
		}
	}

	/// Dispatch a due debounced query and apply any finished runs.
	pub fn pump(&mut self) {
		self.pump_at(Instant::now());
	}

	fn pump_at(&mut self, now: Instant) {
		if self.is_disposed() {
			return;
		}
		let debounce_elapsed =
			matches!(&self.state, SessionState::Debounced { due, .. } if *due <= now);
		if debounce_elapsed
			&& let SessionState::Debounced { query, .. } =
				mem::replace(&mut self.state, SessionState::Idle)
		{
			self.dispatch(query);
		}
		while let Ok(completion) = self.completions.try_recv() {
			self.on_run_completed(completion);
		}
	}

	/// Apply a finished run if it is still the live one.
	pub fn on_run_completed(&mut self, completion: RunCompletion) {
		let id = completion.id;
		let roots = match mem::replace(&mut self.state, SessionState::Idle) {
			SessionState::Searching { run, roots } if run.id() == id => roots,
			other => {
				self.state = other;
				log::debug!("dropping stale completion for run {id}");
				return;
			}
		};
		let results = collect_results(completion, roots);
		self.present(results);
	}

	/// Act on the row at `index` of the rendered list.
	///
	/// Only valid while results are presented. The peek row opens the
	/// aggregate view; a match row opens its file. Either way the prompt is
	/// closed afterwards.
	pub fn accept(&mut self, index: usize) {
		let SessionState::Presenting { results } = &self.state else {
			log::debug!("accept ignored in {:?}", self.phase());
			return;
		};
		let Some(entry) = self.entries.get(index).cloned() else {
			log::debug!("accept ignored: no row at {index}");
			return;
		};

		match entry {
			ListEntry::Peek { .. } => {
				let peek = aggregate(&results.matches);
				let PeekResult::Locations(locations) = &peek else {
					self.view.show_no_results();
					return;
				};
				if let Some(anchor) = peek.anchor() {
					let (path, position) = (anchor.path.clone(), anchor.range.start);
					self.close();
					self.opener.open_peek(&path, position, locations);
				}
			}
			ListEntry::Match(record) => {
				self.close();
				self.opener.open(&record.path, record.line, record.column);
			}
		}
	}

	/// The prompt was dismissed: stop searching and forget the results.
	pub fn hide(&mut self) {
		if self.is_disposed() {
			return;
		}
		self.close();
	}

	/// Release everything. Afterwards the session holds no live process and
	/// every method is a no-op.
	pub fn dispose(&mut self) {
		if self.is_disposed() {
			return;
		}
		self.cancel_live_run();
		self.entries.clear();
		self.view.set_busy(false);
		self.view.hide();
		self.state = SessionState::Disposed;
	}

	fn dispatch(&mut self, query: Query) {
		self.cancel_live_run();

		if query.is_too_short(self.config.min_query_length) {
			log::debug!("query {query:?} is too short to search");
			self.clear_results();
			self.state = SessionState::Idle;
			return;
		}

		let scope = SearchScope::from_provider(self.roots.as_ref());
		self.next_run_id = self.next_run_id.wrapping_add(1);
		let id = self.next_run_id;
		log::info!("run {id}: searching {query:?} in {} root(s)", scope.roots().len());

		self.view.set_busy(true);
		let run = self.launcher.launch(id, &query, &scope);
		self.state = SessionState::Searching {
			run,
			roots: scope.roots().to_vec(),
		};
	}

	fn present(&mut self, results: ResultSet) {
		self.entries = build_entries(&results, self.config.peek_entry);
		self.view.set_busy(false);
		self.view.set_hidden_count(results.hidden);
		self.view.render(&self.entries);
		self.state = SessionState::Presenting { results };
	}

	fn close(&mut self) {
		self.cancel_live_run();
		self.clear_results();
		self.view.hide();
		self.query = Query::default();
		self.state = SessionState::Idle;
	}

	fn clear_results(&mut self) {
		self.entries.clear();
		self.view.set_busy(false);
		self.view.set_hidden_count(0);
		self.view.render(&self.entries);
	}

	fn cancel_live_run(&mut self) {
		if let SessionState::Searching { run, .. } = &mut self.state {
			log::debug!("run {}: cancelled", run.id());
			run.cancel();
			self.state = SessionState::Idle;
		}
	}
}

impl<L, V, O> Drop for SearchSession<L, V, O>
where
	L: SearchLauncher,
	V: ResultView,
	O: FileOpener,
{
	fn drop(&mut self) {
		self.dispose();
	}
}

fn collect_results(completion: RunCompletion, roots: Vec<PathBuf>) -> ResultSet {
	let id = completion.id;
	let output = match completion.outcome {
		Ok(output) => output,
		Err(error) => {
			if error.is_invocation_failure() {
				log::error!("run {id}: {error}");
			} else {
				log::warn!("run {id}: {error}");
			}
			return ResultSet::default();
		}
	};

	if let Some(error) = output.status_error() {
		log::error!("run {id}: {error}");
	}

	let report = RecordParser::new(roots).parse_output(&output.stdout);
	let results = report.results;
	if let Some(failure) = report.failure {
		let error = RunError::Parse {
			recovered: results.len(),
			failure,
		};
		log::error!("run {id}: {error}");
	}
	if results.hidden > 0 {
		log::info!("run {id}: {} result(s) hidden (binary content)", results.hidden);
	}
	log::debug!("run {id}: {} match(es)", results.len());
	results
}

fn build_entries(results: &ResultSet, peek_entry: bool) -> Vec<ListEntry> {
	let mut entries = Vec::with_capacity(results.len() + 1);
	if peek_entry && !results.is_empty() {
		entries.push(ListEntry::Peek {
			count: results.len(),
		});
	}
	entries.extend(results.matches.iter().cloned().map(ListEntry::Match));
	entries
}
