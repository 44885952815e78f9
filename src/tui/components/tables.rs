//! Sectioned list rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Row, Table, TableState};

use crate::tui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;

/// Render the sectioned operator list inside a bordered block and return the
/// inner area rows were drawn into, for hit-testing.
pub(crate) fn render_list(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	rows: Vec<Row<'static>>,
	title: &str,
	theme: &Theme,
) -> Rect {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(title.to_string());

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let widths = [Constraint::Fill(1), Constraint::Length(2)];
	let table = Table::new(rows, widths)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	inner
}
