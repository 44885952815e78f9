//! Flattened row projection of the sectioned list.
//!
//! The table widget renders a flat sequence of one-line rows; section headers
//! are interleaved as non-selectable entries. Keeping the flat layout around
//! is what lets mouse hit-testing map a screen line back to a (section, row)
//! coordinate.

use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};

use crate::browser::Browser;
use crate::catalog::{Category, Operator};
use crate::tui::style::Theme;

/// Marker shown next to the currently selected operator.
pub(crate) const SELECTED_MARK: &str = "✓";

/// One entry in the flattened list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlatEntry {
	/// Section header for the category at this index.
	Header(usize),
	/// Operator row at (section, row) in the active catalog.
	Row {
		section: usize,
		row: usize,
		operator: Operator,
	},
}

impl FlatEntry {
	/// The (section, row) coordinate, for operator rows only.
	pub(crate) fn coordinate(self) -> Option<(usize, usize)> {
		match self {
			FlatEntry::Header(_) => None,
			FlatEntry::Row { section, row, .. } => Some((section, row)),
		}
	}

	/// The operator shown on this entry, for operator rows only.
	pub(crate) fn operator(self) -> Option<Operator> {
		match self {
			FlatEntry::Header(_) => None,
			FlatEntry::Row { operator, .. } => Some(operator),
		}
	}
}

/// Flatten the active catalog into header and row entries, in display order.
pub(crate) fn flatten(active: &[Category]) -> Vec<FlatEntry> {
	let mut flat = Vec::new();
	for (section, category) in active.iter().enumerate() {
		flat.push(FlatEntry::Header(section));
		for (row, operator) in category.operators.iter().enumerate() {
			flat.push(FlatEntry::Row {
				section,
				row,
				operator: *operator,
			});
		}
	}
	flat
}

/// Index of the first operator row, if any row is visible.
pub(crate) fn first_row(flat: &[FlatEntry]) -> Option<usize> {
	flat.iter()
		.position(|entry| matches!(entry, FlatEntry::Row { .. }))
}

/// Build one table row per flat entry, in the same order.
pub(crate) fn build_rows(browser: &Browser, flat: &[FlatEntry], theme: &Theme) -> Vec<Row<'static>> {
	flat.iter()
		.map(|entry| match *entry {
			FlatEntry::Header(section) => {
				let title = browser.section_title(section).unwrap_or("");
				Row::new([Cell::from(Span::styled(
					title.to_string(),
					theme.header.add_modifier(Modifier::BOLD),
				))])
			}
			FlatEntry::Row { section, row, .. } => {
				let Some(cell) = browser.cell_content(section, row) else {
					return Row::new([Cell::from("")]);
				};
				let marker = if cell.is_selected { SELECTED_MARK } else { "" };
				Row::new([
					Cell::from(format!("  {}", cell.text)),
					Cell::from(Span::styled(marker, theme.marker_style())),
				])
			}
		})
		.collect()
}
