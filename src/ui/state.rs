//! Core state container for the terminal picker.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::outcome::OutcomeRecorder;
use super::pane::ResultsPane;
use crate::search::{
	DirectoryRoots, ProcessRunner, RunCompletion, SearchLauncher, SearchSession, SessionConfig,
	WorkspaceRoots,
};

/// Presentation options that do not affect searching.
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
	/// Shown in front of the prompt.
	pub title: String,
	/// Prompt text on startup; searched immediately when long enough.
	pub initial_query: String,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a, L: SearchLauncher = ProcessRunner> {
	pub(super) session: SearchSession<L, ResultsPane, OutcomeRecorder>,
	pub search_input: SearchInput<'a>,
	pub(super) title: String,
	pub(crate) throbber_state: ThrobberState,
	/// Visible list height from the last draw, used for paging.
	pub(super) page_size: usize,
}

impl<'a> App<'a> {
	/// Construct an [`App`] searching `roots` with the configured tool.
	pub fn new(config: SessionConfig, roots: Vec<PathBuf>, options: UiOptions) -> Self {
		let (completion_tx, completion_rx) = mpsc::channel();
		let runner = ProcessRunner::new(
			config.tool.clone(),
			config.max_output_bytes,
			completion_tx,
		);
		Self::with_launcher(
			config,
			runner,
			completion_rx,
			Box::new(DirectoryRoots::new(roots)),
			options,
		)
	}
}

impl<'a, L: SearchLauncher> App<'a, L> {
	/// Construct an [`App`] around an arbitrary launcher. `completions` must
	/// receive what `launcher` reports.
	pub fn with_launcher(
		config: SessionConfig,
		launcher: L,
		completions: Receiver<RunCompletion>,
		roots: Box<dyn WorkspaceRoots>,
		options: UiOptions,
	) -> Self {
		let UiOptions {
			title,
			initial_query,
		} = options;
		let session = SearchSession::new(
			config,
			launcher,
			completions,
			roots,
			ResultsPane::default(),
			OutcomeRecorder::default(),
		);
		let mut app = Self {
			session,
			search_input: SearchInput::new(initial_query.clone()),
			title,
			throbber_state: ThrobberState::default(),
			page_size: 1,
		};
		app.session.show();
		if !initial_query.is_empty() {
			app.session.query_changed(&initial_query);
		}
		app
	}

	#[must_use]
	pub fn pane(&self) -> &ResultsPane {
		self.session.view()
	}

	pub(super) fn pane_mut(&mut self) -> &mut ResultsPane {
		self.session.view_mut()
	}

	#[must_use]
	pub fn session(&self) -> &SearchSession<L, ResultsPane, OutcomeRecorder> {
		&self.session
	}

	/// Apply finished runs and advance the busy indicator.
	pub fn tick(&mut self) {
		self.session.pump();
		if self.pane().is_busy() {
			self.throbber_state.calc_next();
		}
	}

	/// Stop any live run and release the session.
	pub fn shutdown(&mut self) {
		self.session.dispose();
	}
}

#[cfg(test)]
mod tests;
