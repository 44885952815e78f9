//! Keyboard and mouse event handling.

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::state::{App, BrowseOutcome};

impl App<'_> {
	/// Process a keyboard event and return an outcome if the session ends.
	///
	/// While a peek popup is open it is modal: Enter commits it, anything else
	/// dismisses it.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			self.dismiss_peek();
			return Ok(Some(self.outcome()));
		}

		if self.peek.is_some() {
			match key.code {
				KeyCode::Enter => self.pop_peek(),
				_ => self.dismiss_peek(),
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => {
				return Ok(Some(self.outcome()));
			}
			KeyCode::Enter => {
				if let Some(index) = self.table_state.selected() {
					self.tap_flat_index(index);
				}
			}
			KeyCode::Char(' ') | KeyCode::Tab => {
				self.peek_cursor_row();
			}
			KeyCode::Up => {
				self.move_cursor_up();
			}
			KeyCode::Down => {
				self.move_cursor_down();
			}
			// Ctrl+P to toggle the detail pane
			KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.toggle_detail();
			}
			_ => {
				if self.search_input.input(key) {
					let query = self.search_input.text().to_string();
					self.browser.search_changed(&query, &mut self.shell);
				}
			}
		}
		Ok(None)
	}

	/// Process a mouse event. Clicks outside any row are no-ops.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if self.peek.is_some() {
					self.pop_peek();
					return;
				}
				if let Some(index) = self.flat_index_at(mouse.column, mouse.row) {
					self.tap_flat_index(index);
				}
			}
			MouseEventKind::Down(MouseButton::Right) => {
				self.dismiss_peek();
				if let Some(index) = self.flat_index_at(mouse.column, mouse.row) {
					self.peek_flat_index(index);
				}
			}
			MouseEventKind::ScrollUp => {
				self.dismiss_peek();
				self.move_cursor_up();
			}
			MouseEventKind::ScrollDown => {
				self.dismiss_peek();
				self.move_cursor_down();
			}
			_ => {}
		}
	}
}
