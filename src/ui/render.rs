use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use throbber_widgets_tui::Throbber;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::App;
use crate::search::{ListEntry, MatchRecord, SearchLauncher, SessionPhase};

const HIGHLIGHT_SYMBOL: &str = "> ";
const ELLIPSIS: char = '…';
const LOCATION_GAP: &str = "  ";

impl<'a, L: SearchLauncher> App<'a, L> {
	/// Draw the prompt row, the status row and the result list.
	pub fn draw(&mut self, frame: &mut Frame) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(0),
			])
			.split(frame.area());

		self.render_prompt(frame, rows[0]);
		frame.render_widget(
			Paragraph::new(self.status_text()).style(Style::default().add_modifier(Modifier::DIM)),
			rows[1],
		);
		self.render_results(frame, rows[2]);
	}

	fn render_prompt(&self, frame: &mut Frame, area: Rect) {
		let prompt = if self.title.is_empty() {
			String::new()
		} else {
			format!("{} > ", self.title)
		};
		let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
		let spinner_width = if self.pane().is_busy() { 2 } else { 0 };
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Length(prompt_width),
				Constraint::Min(1),
				Constraint::Length(spinner_width),
			])
			.split(area);

		if !prompt.is_empty() {
			frame.render_widget(
				Paragraph::new(prompt).style(Style::default().add_modifier(Modifier::BOLD)),
				columns[0],
			);
		}
		self.search_input.render(frame, columns[1]);
		if self.pane().is_busy() {
			let symbol = Throbber::default().to_symbol_span(&self.throbber_state);
			frame.render_widget(Paragraph::new(Line::from(symbol)), columns[2]);
		}
	}

	pub(super) fn status_text(&self) -> String {
		let pane = self.pane();
		if let Some(notice) = pane.notice() {
			return notice.to_string();
		}
		match self.session.phase() {
			SessionPhase::Searching => "Searching…".to_string(),
			SessionPhase::Debounced => String::new(),
			SessionPhase::Presenting => {
				let count = self
					.session
					.results()
					.map_or(0, |results| results.matches.len());
				let noun = if count == 1 { "match" } else { "matches" };
				if pane.hidden() > 0 {
					format!("{count} {noun} ({} binary hidden)", pane.hidden())
				} else {
					format!("{count} {noun}")
				}
			}
			SessionPhase::Idle | SessionPhase::Disposed => format!(
				"Type at least {} characters to search",
				self.session.config().min_query_length
			),
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.page_size = usize::from(area.height);
		let width = usize::from(area.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
		let items: Vec<ListItem> = self
			.pane()
			.entries()
			.iter()
			.map(|entry| ListItem::new(entry_line(entry, width)))
			.collect();
		let list = List::new(items)
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.highlight_style(Style::default().add_modifier(Modifier::REVERSED));
		frame.render_stateful_widget(list, area, &mut self.pane_mut().list_state);
	}
}

fn entry_line(entry: &ListEntry, width: usize) -> Line<'static> {
	match entry {
		ListEntry::Peek { count } => Line::from(Span::styled(
			truncate_to_width(&format!("⟫ Open {count} results in peek view"), width),
			Style::default().add_modifier(Modifier::ITALIC),
		)),
		ListEntry::Match(record) => match_line(record, width),
	}
}

fn match_line(record: &MatchRecord, width: usize) -> Line<'static> {
	let location = truncate_to_width(&format!("{}:{}", record.label, record.line + 1), width);
	let remaining = width.saturating_sub(location.width() + LOCATION_GAP.width());
	let text = record
		.preview
		.split_once(": ")
		.map_or(record.preview.as_str(), |(_, text)| text)
		.trim_start();
	Line::from(vec![
		Span::styled(location, Style::default().add_modifier(Modifier::BOLD)),
		Span::raw(LOCATION_GAP),
		Span::raw(truncate_to_width(text, remaining)),
	])
}

/// Cut `text` so it occupies at most `max` terminal columns, marking the cut
/// with an ellipsis.
pub(super) fn truncate_to_width(text: &str, max: usize) -> String {
	if text.width() <= max {
		return text.to_string();
	}
	if max == 0 {
		return String::new();
	}
	let budget = max - 1;
	let mut used = 0;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		truncated.push(ch);
	}
	truncated.push(ELLIPSIS);
	truncated
}
