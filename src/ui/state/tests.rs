use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::query::Query;
use crate::search::{RunHandle, RunId, RunOutput, SearchScope};
use crate::ui::{SearchOutcome, SearchSelection};

/// Launcher that starts nothing; tests deliver completions by hand.
#[derive(Default)]
struct StubLauncher {
	launched: Vec<String>,
}

impl SearchLauncher for StubLauncher {
	fn launch(&mut self, id: RunId, query: &Query, _scope: &SearchScope) -> RunHandle {
		self.launched.push(query.as_str().to_string());
		RunHandle::finished(id)
	}
}

fn match_line(path: &str, line_number: u64, text: &str) -> String {
	serde_json::json!({
		"type": "match",
		"data": {
			"path": {"text": path},
			"lines": {"text": format!("{text}\n")},
			"line_number": line_number,
			"submatches": [{"match": {"text": "needle"}, "start": 0, "end": 6}],
		}
	})
	.to_string()
}

fn app(initial_query: &str) -> (App<'static, StubLauncher>, Sender<RunCompletion>) {
	let (tx, rx) = mpsc::channel();
	let roots = || vec![PathBuf::from("/work")];
	let app = App::with_launcher(
		SessionConfig::default(),
		StubLauncher::default(),
		rx,
		Box::new(roots),
		UiOptions {
			title: "work".into(),
			initial_query: initial_query.into(),
		},
	);
	(app, tx)
}

fn complete(app: &mut App<'static, StubLauncher>, tx: &Sender<RunCompletion>, stdout: String) {
	let id = app.session().live_run().expect("a run should be live");
	tx.send(RunCompletion {
		id,
		outcome: Ok(RunOutput {
			stdout,
			stderr: String::new(),
			exit_code: Some(0),
		}),
	})
	.unwrap();
	app.tick();
}

fn two_matches() -> String {
	format!(
		"{}\n{}\n",
		match_line("/work/src/a.rs", 3, "needle in a"),
		match_line("/work/src/b.rs", 10, "needle in b"),
	)
}

fn type_text(app: &mut App<'static, StubLauncher>, text: &str) {
	for ch in text.chars() {
		assert!(
			app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
				.is_none()
		);
	}
}

fn press(app: &mut App<'static, StubLauncher>, code: KeyCode) -> Option<SearchOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn render(app: &mut App<'static, StubLauncher>) -> String {
	let backend = TestBackend::new(60, 8);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn initial_query_starts_a_search() {
	let (app, _tx) = app("needle");
	assert!(app.session().live_run().is_some());
	assert!(app.pane().is_busy());
	assert!(app.pane().is_visible());
}

#[test]
fn short_initial_query_stays_idle() {
	let (app, _tx) = app("ne");
	assert!(app.session().live_run().is_none());
}

#[test]
fn typing_dispatches_once_long_enough() {
	let (mut app, _tx) = app("");
	type_text(&mut app, "ne");
	assert!(app.session().live_run().is_none());
	type_text(&mut app, "e");
	assert!(app.session().live_run().is_some());
}

#[test]
fn results_render_with_peek_row_and_relative_labels() {
	let (mut app, tx) = app("needle");
	complete(&mut app, &tx, two_matches());

	let screen = render(&mut app);
	assert!(screen.contains("work > needle"));
	assert!(screen.contains("2 matches"));
	assert!(screen.contains("⟫ Open 2 results in peek view"));
	assert!(screen.contains("src/a.rs:3  needle in a"));
	assert!(screen.contains("src/b.rs:10  needle in b"));
}

#[test]
fn hidden_binary_matches_are_reported() {
	let (mut app, tx) = app("needle");
	let binary = r#"{"type":"match","data":{"path":{"text":"/work/x.bin"},"lines":{"bytes":"AA=="},"line_number":1,"submatches":[{"start":0,"end":1}]}}"#;
	complete(
		&mut app,
		&tx,
		format!("{}\n{binary}\n", match_line("/work/a.rs", 1, "needle")),
	);

	let screen = render(&mut app);
	assert!(screen.contains("1 match (1 binary hidden)"));
}

#[test]
fn idle_status_explains_minimum_length() {
	let (mut app, _tx) = app("");
	let screen = render(&mut app);
	assert!(screen.contains("Type at least 3 characters"));
}

#[test]
fn enter_on_match_row_returns_file_selection() {
	let (mut app, tx) = app("needle");
	complete(&mut app, &tx, two_matches());

	assert!(press(&mut app, KeyCode::Down).is_none());
	assert!(press(&mut app, KeyCode::Down).is_none());
	let outcome = press(&mut app, KeyCode::Enter).expect("accept closes the picker");
	assert_eq!(outcome.query, "needle");
	assert_eq!(
		outcome.selection,
		Some(SearchSelection::File {
			path: PathBuf::from("/work/src/b.rs"),
			line: 9,
			column: 0,
		})
	);
	assert!(!app.pane().is_visible());
}

#[test]
fn enter_on_peek_row_returns_all_locations() {
	let (mut app, tx) = app("needle");
	complete(&mut app, &tx, two_matches());

	let outcome = press(&mut app, KeyCode::Enter).expect("accept closes the picker");
	let Some(SearchSelection::Peek { locations }) = outcome.selection else {
		panic!("expected a peek selection");
	};
	assert_eq!(locations.len(), 2);
	assert_eq!(locations[0].path, PathBuf::from("/work/src/a.rs"));
}

#[test]
fn enter_while_searching_keeps_the_picker_open() {
	let (mut app, _tx) = app("needle");
	assert!(press(&mut app, KeyCode::Enter).is_none());
}

#[test]
fn escape_cancels_and_stops_the_search() {
	let (mut app, _tx) = app("needle");
	let outcome = press(&mut app, KeyCode::Esc).expect("escape closes the picker");
	assert!(!outcome.accepted());
	assert_eq!(outcome.query, "needle");
	assert!(app.session().live_run().is_none());
}

#[test]
fn page_down_jumps_by_visible_rows() {
	let (mut app, tx) = app("needle");
	let stdout: String = (1..=20)
		.map(|n| match_line("/work/a.rs", n, "needle") + "\n")
		.collect();
	complete(&mut app, &tx, stdout);
	render(&mut app);

	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.pane().selected(), Some(6));
	press(&mut app, KeyCode::PageUp);
	assert_eq!(app.pane().selected(), Some(0));
}
