use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::SearchOutcome;
use crate::search::SearchLauncher;

impl<'a, L: SearchLauncher> App<'a, L> {
	/// React to a key press. Returns the outcome once the picker should close.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.cancel()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.cancel());
			}
			KeyCode::Enter => return self.accept_selected(),
			KeyCode::Up => self.pane_mut().move_selection(-1),
			KeyCode::Down => self.pane_mut().move_selection(1),
			KeyCode::PageUp => {
				let step = self.page_step();
				self.pane_mut().move_selection(-step);
			}
			KeyCode::PageDown => {
				let step = self.page_step();
				self.pane_mut().move_selection(step);
			}
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.session.query_changed(&text);
				}
			}
		}
		None
	}

	fn cancel(&mut self) -> SearchOutcome {
		self.session.hide();
		SearchOutcome::cancelled(self.search_input.text())
	}

	/// Hand the selected row to the session. The picker only closes when the
	/// session actually opened something.
	fn accept_selected(&mut self) -> Option<SearchOutcome> {
		let index = self.pane().selected()?;
		self.session.accept(index);
		let selection = self.session.opener_mut().take()?;
		Some(SearchOutcome {
			query: self.search_input.text().to_string(),
			selection: Some(selection),
		})
	}

	fn page_step(&self) -> isize {
		isize::try_from(self.page_size.max(1)).unwrap_or(isize::MAX)
	}
}
