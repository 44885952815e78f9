//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::tui::style::Theme;

/// Text input widget for the search filter.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Construct the input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: String) -> Self {
		let mut textarea = TextArea::from([initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Apply theme-derived styles and the placeholder text.
	pub fn apply_theme(&mut self, theme: &Theme, placeholder: &str) {
		self.textarea.set_style(theme.prompt);
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(theme.empty_style());
	}

	/// The current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key event to the input. Returns whether the text changed.
	///
	/// Enter, Tab and Space never reach this widget; the content stays a
	/// single line and operator names contain no spaces.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Render the input line.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
