use ratatui::widgets::ListState;

use crate::search::{ListEntry, ResultView};

/// [`ResultView`] backing the terminal list.
#[derive(Debug, Default)]
pub struct ResultsPane {
	entries: Vec<ListEntry>,
	pub(crate) list_state: ListState,
	busy: bool,
	visible: bool,
	hidden: usize,
	notice: Option<String>,
}

impl ResultsPane {
	#[must_use]
	pub fn entries(&self) -> &[ListEntry] {
		&self.entries
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.list_state.selected()
	}

	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.busy
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	#[must_use]
	pub fn hidden(&self) -> usize {
		self.hidden
	}

	#[must_use]
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	/// Move the selection by `delta` rows, clamped to the list.
	pub fn move_selection(&mut self, delta: isize) {
		if self.entries.is_empty() {
			self.list_state.select(None);
			return;
		}
		let last = self.entries.len() - 1;
		let current = self.list_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(last);
		self.list_state.select(Some(next));
	}
}

impl ResultView for ResultsPane {
	fn render(&mut self, entries: &[ListEntry]) {
		self.entries = entries.to_vec();
		self.notice = None;
		let selected = if self.entries.is_empty() { None } else { Some(0) };
		self.list_state.select(selected);
	}

	fn set_busy(&mut self, busy: bool) {
		self.busy = busy;
	}

	fn show(&mut self) {
		self.visible = true;
	}

	fn hide(&mut self) {
		self.visible = false;
		self.entries.clear();
		self.list_state.select(None);
	}

	fn show_no_results(&mut self) {
		self.notice = Some("No results to peek".to_string());
	}

	fn set_hidden_count(&mut self, hidden: usize) {
		self.hidden = hidden;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_is_clamped_to_the_list() {
		let mut pane = ResultsPane::default();
		pane.render(&[ListEntry::Peek { count: 2 }, ListEntry::Peek { count: 2 }]);
		assert_eq!(pane.selected(), Some(0));
		pane.move_selection(-3);
		assert_eq!(pane.selected(), Some(0));
		pane.move_selection(10);
		assert_eq!(pane.selected(), Some(1));
	}

	#[test]
	fn empty_render_clears_selection() {
		let mut pane = ResultsPane::default();
		pane.render(&[ListEntry::Peek { count: 1 }]);
		pane.render(&[]);
		assert_eq!(pane.selected(), None);
		pane.move_selection(1);
		assert_eq!(pane.selected(), None);
	}

	#[test]
	fn a_new_render_drops_the_notice() {
		let mut pane = ResultsPane::default();
		pane.show_no_results();
		assert!(pane.notice().is_some());
		pane.render(&[]);
		assert!(pane.notice().is_none());
	}
}
