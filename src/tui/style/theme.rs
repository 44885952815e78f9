//! Theme definitions and the built-in theme table.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for section headers and borders.
	pub header: Style,
	/// Style for the cursor row.
	pub row_highlight: Style,
	/// Style for the query prompt.
	pub prompt: Style,
	/// Style for empty states and muted text.
	pub empty: Style,
	/// Style for the selection marker and emphasized text.
	pub highlight: Style,
}

impl Theme {
	/// Returns the style used for muted or placeholder text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the style used for the selected-operator marker.
	#[must_use]
	pub fn marker_style(&self) -> Style {
		self.highlight
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

const BUILTINS: &[(&str, fn() -> Theme)] = &[("marble", marble), ("light", light), ("mono", mono)];

/// The default theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
	marble()
}

/// Names of all built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme by name, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, build)| build())
}

fn marble() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::DarkGray),
		prompt: Style::new().fg(Color::White),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Yellow),
	}
}

fn light() -> Theme {
	Theme {
		header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Gray),
		prompt: Style::new().fg(Color::Black),
		empty: Style::new().fg(Color::Gray),
		highlight: Style::new().fg(Color::Magenta),
	}
}

fn mono() -> Theme {
	Theme {
		header: Style::new().add_modifier(Modifier::BOLD),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new(),
		empty: Style::new().add_modifier(Modifier::DIM),
		highlight: Style::new().add_modifier(Modifier::BOLD),
	}
}
