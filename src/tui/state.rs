//! Core state container for the terminal application's front-end.
//!
//! The [`App`] bundles the view-state controller with UI-specific caches: the
//! query input, the flattened row projection, cursor state, and the peek
//! popup.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use serde::Serialize;

use crate::browser::{Browser, Shell};
use crate::catalog::Operator;
use crate::detail::DetailView;
use crate::tui::components::rows::{self, FlatEntry};
use crate::tui::config::UiLabels;
use crate::tui::input::SearchInput;
use crate::tui::preview::Peek;
use crate::tui::style::{StyleConfig, Theme};

/// Result of a completed browsing session.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseOutcome {
	/// Whether the user committed a selection during the session.
	pub accepted: bool,
	/// The operator selected when the session ended.
	pub selection: Operator,
	/// The query text at exit.
	pub query: String,
}

/// Shell implementation backing the TUI: effects requested by the controller
/// are recorded here and absorbed before the next draw.
#[derive(Debug, Default)]
pub(crate) struct UiShell {
	/// Set when the controller asked for a re-render.
	pub(crate) needs_redraw: bool,
	/// Operator whose detail should be presented, if any.
	pub(crate) presented: Option<Operator>,
	/// Detail card built at peek time, reused instead of rebuilding.
	pub(crate) prebuilt: Option<DetailView>,
}

impl Shell for UiShell {
	fn request_re_render(&mut self) {
		self.needs_redraw = true;
	}

	fn present_detail(&mut self, operator: Operator) {
		self.presented = Some(operator);
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Selection and search state.
	pub browser: Browser,
	/// Text input widget for the search filter.
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) table_state: TableState,
	pub(crate) flat: Vec<FlatEntry>,
	pub(crate) shell: UiShell,
	pub(crate) peek: Option<Peek>,
	pub(crate) detail: DetailView,
	pub(crate) detail_enabled: bool,
	pub(crate) detail_forced: Option<bool>,
	pub(crate) list_area: Option<Rect>,
	pub(crate) committed: bool,
}

impl Default for App<'_> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> App<'a> {
	/// Construct an [`App`] over the static catalog with default settings.
	#[must_use]
	pub fn new() -> Self {
		let browser = Browser::new();
		let ui = UiLabels::default();
		let style = StyleConfig::default();
		let mut search_input = SearchInput::new(String::new());
		search_input.apply_theme(&style.theme, &ui.filter_placeholder);

		let flat = rows::flatten(browser.active());
		let mut table_state = TableState::default();
		table_state.select(rows::first_row(&flat));

		let detail = DetailView::build(browser.selected());

		Self {
			browser,
			search_input,
			ui,
			style,
			table_state,
			flat,
			shell: UiShell::default(),
			peek: None,
			detail,
			detail_enabled: false,
			detail_forced: None,
			list_area: None,
			committed: false,
		}
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.search_input
			.apply_theme(&theme, &self.ui.filter_placeholder);
	}

	/// Seed the query input and filter state before the first draw.
	pub fn set_initial_query(&mut self, query: &str) {
		self.search_input = SearchInput::new(query.to_string());
		self.search_input
			.apply_theme(&self.style.theme, &self.ui.filter_placeholder);
		self.browser.search_changed(query, &mut self.shell);
		self.sync();
	}

	/// Force the detail pane on or off instead of sizing it responsively.
	pub fn force_detail_pane(&mut self, forced: Option<bool>) {
		self.detail_forced = forced;
		if let Some(enabled) = forced {
			self.detail_enabled = enabled;
		}
	}

	/// Absorb pending controller effects: install presented detail content and
	/// rebuild the flattened projection after a re-render request.
	pub(crate) fn sync(&mut self) {
		if let Some(operator) = self.shell.presented.take() {
			self.detail = match self.shell.prebuilt.take() {
				Some(view) if view.operator == operator => view,
				_ => DetailView::build(operator),
			};
			self.committed = true;
		}
		if std::mem::take(&mut self.shell.needs_redraw) {
			self.refresh_projection();
		}
	}

	/// Rebuild the flat row layout from the active catalog, keeping the cursor
	/// on the same operator when it is still visible.
	pub(crate) fn refresh_projection(&mut self) {
		// The old projection remembers which operator sat under the cursor,
		// so the restore does not depend on coordinates shifting.
		let cursor_operator = self
			.table_state
			.selected()
			.and_then(|index| self.flat.get(index))
			.and_then(|entry| entry.operator());

		self.flat = rows::flatten(self.browser.active());

		let restored = cursor_operator.and_then(|operator| {
			self.flat
				.iter()
				.position(|entry| entry.operator() == Some(operator))
		});
		self.table_state
			.select(restored.or_else(|| rows::first_row(&self.flat)));
	}

	/// The (section, row) coordinate under the cursor, if any.
	pub(crate) fn cursor_coordinate(&self) -> Option<(usize, usize)> {
		let index = self.table_state.selected()?;
		self.flat.get(index)?.coordinate()
	}

	pub(crate) fn move_cursor_up(&mut self) {
		let Some(current) = self.table_state.selected() else {
			return;
		};
		let previous = self.flat[..current]
			.iter()
			.rposition(|entry| entry.coordinate().is_some());
		if let Some(index) = previous {
			self.table_state.select(Some(index));
		}
	}

	pub(crate) fn move_cursor_down(&mut self) {
		let start = self.table_state.selected().map_or(0, |index| index + 1);
		if start >= self.flat.len() {
			return;
		}
		let next = self.flat[start..]
			.iter()
			.position(|entry| entry.coordinate().is_some());
		if let Some(offset) = next {
			self.table_state.select(Some(start + offset));
		}
	}

	/// Hit-test a screen position against the rows drawn by the last render.
	pub(crate) fn flat_index_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.list_area?;
		let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
		let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
		if !inside_x || !inside_y {
			return None;
		}
		let index = self.table_state.offset() + usize::from(row - area.y);
		(index < self.flat.len()).then_some(index)
	}

	/// On-screen bounds of a flat row, if it is currently visible.
	pub(crate) fn row_anchor(&self, index: usize) -> Option<Rect> {
		let area = self.list_area?;
		let offset = self.table_state.offset();
		let visible = index.checked_sub(offset)?;
		if visible >= usize::from(area.height) {
			return None;
		}
		Some(Rect::new(
			area.x,
			area.y + visible as u16,
			area.width,
			1,
		))
	}

	/// Tap the flat entry at `index`. Headers and stale indices are no-ops.
	pub(crate) fn tap_flat_index(&mut self, index: usize) {
		let Some(entry) = self.flat.get(index) else {
			return;
		};
		let Some((section, row)) = entry.coordinate() else {
			return;
		};
		self.table_state.select(Some(index));
		self.browser.row_tapped(section, row, &mut self.shell);
	}

	/// Open a peek for the flat entry at `index`. No state mutation beyond the
	/// popup itself.
	pub(crate) fn peek_flat_index(&mut self, index: usize) {
		let Some((section, row)) = self.flat.get(index).and_then(|entry| entry.coordinate())
		else {
			return;
		};
		let Some(operator) = self.browser.operator_at(section, row) else {
			return;
		};
		let anchor = self.row_anchor(index).unwrap_or_default();
		self.peek = Some(Peek::new(operator, anchor));
	}

	/// Open a peek for the row under the cursor.
	pub(crate) fn peek_cursor_row(&mut self) {
		if let Some(index) = self.table_state.selected() {
			self.peek_flat_index(index);
		}
	}

	/// Commit an open peek, reusing its already-built detail card.
	pub(crate) fn pop_peek(&mut self) {
		let Some(peek) = self.peek.take() else {
			return;
		};
		self.shell.prebuilt = Some(peek.view);
		self.browser.preview_committed(peek.operator, &mut self.shell);
	}

	/// Drop an open peek without touching any other state.
	pub(crate) fn dismiss_peek(&mut self) {
		self.peek = None;
	}

	/// Toggle the detail pane visibility.
	pub(crate) fn toggle_detail(&mut self) {
		self.detail_enabled = !self.detail_enabled;
		self.detail_forced = Some(self.detail_enabled);
	}

	/// Update detail pane visibility based on terminal width, unless the pane
	/// was forced on or off.
	pub(crate) fn update_detail_responsive(&mut self, width: u16) {
		const MIN_WIDTH_FOR_DETAIL: u16 = 100;

		if self.detail_forced.is_none() {
			self.detail_enabled = width >= MIN_WIDTH_FOR_DETAIL;
		}
	}

	pub(crate) fn outcome(&self) -> BrowseOutcome {
		BrowseOutcome {
			accepted: self.committed,
			selection: self.browser.selected(),
			query: self.search_input.text().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_app_starts_on_the_first_operator_row() {
		let app = App::new();
		assert_eq!(app.cursor_coordinate(), Some((0, 0)));
		assert_eq!(app.browser.selected(), Operator::Delay);
		assert_eq!(app.detail.operator, Operator::Delay);
		assert!(!app.committed);
	}

	#[test]
	fn initial_query_filters_before_the_first_draw() {
		let mut app = App::new();
		app.set_initial_query("zip");
		assert_eq!(app.search_input.text(), "zip");
		assert_eq!(app.browser.section_count(), 1);
		assert_eq!(app.flat.len(), 2);
		assert_eq!(app.cursor_coordinate(), Some((0, 0)));
	}

	#[test]
	fn cursor_skips_section_headers() {
		let mut app = App::new();
		// Cursor starts on Delay at flat index 1; index 0 is the header.
		app.move_cursor_up();
		assert_eq!(app.cursor_coordinate(), Some((0, 0)));

		for _ in 0..8 {
			app.move_cursor_down();
		}
		// Eight steps from Delay lands on CombineLatest, past the
		// "Combining" header.
		assert_eq!(app.cursor_coordinate(), Some((1, 0)));
	}

	#[test]
	fn tapping_a_row_commits_and_installs_detail() {
		let mut app = App::new();
		app.move_cursor_down();
		let index = app.table_state.selected().unwrap();
		app.tap_flat_index(index);
		app.sync();

		assert_eq!(app.browser.selected(), Operator::Map);
		assert_eq!(app.detail.operator, Operator::Map);
		assert!(app.committed);
	}

	#[test]
	fn tapping_a_header_is_a_no_op() {
		let mut app = App::new();
		app.tap_flat_index(0);
		app.sync();
		assert_eq!(app.browser.selected(), Operator::Delay);
		assert!(!app.committed);
	}

	#[test]
	fn peek_does_not_mutate_selection_until_popped() {
		let mut app = App::new();
		app.move_cursor_down();
		app.peek_cursor_row();

		let peeked = app.peek.as_ref().map(|peek| peek.operator);
		assert_eq!(peeked, Some(Operator::Map));
		assert_eq!(app.browser.selected(), Operator::Delay);

		app.dismiss_peek();
		app.sync();
		assert_eq!(app.browser.selected(), Operator::Delay);
		assert!(!app.committed);
	}

	#[test]
	fn popping_a_peek_reuses_the_built_card() {
		let mut app = App::new();
		app.move_cursor_down();
		app.peek_cursor_row();
		let built = app.peek.as_ref().map(|peek| peek.view.clone()).unwrap();

		app.pop_peek();
		app.sync();

		assert_eq!(app.browser.selected(), Operator::Map);
		assert_eq!(app.detail, built);
		assert!(app.shell.prebuilt.is_none(), "prebuilt card must be consumed");
		assert!(app.peek.is_none());
	}

	#[test]
	fn hit_test_without_a_rendered_list_misses() {
		let app = App::new();
		assert_eq!(app.flat_index_at(2, 3), None);
	}

	#[test]
	fn hit_test_resolves_rows_and_rejects_the_outside() {
		let mut app = App::new();
		app.list_area = Some(Rect::new(1, 2, 30, 10));

		// First visible line is the "Transforming" header.
		assert_eq!(app.flat_index_at(5, 2), Some(0));
		// Second visible line is the Delay row.
		assert_eq!(app.flat_index_at(5, 3), Some(1));
		// Outside the list area.
		assert_eq!(app.flat_index_at(0, 0), None);
		assert_eq!(app.flat_index_at(5, 40), None);
	}

	#[test]
	fn filter_change_keeps_the_cursor_on_the_same_operator() {
		let mut app = App::new();
		for _ in 0..4 {
			app.move_cursor_down();
		}
		assert_eq!(
			app.cursor_coordinate()
				.and_then(|(s, r)| app.browser.operator_at(s, r)),
			Some(Operator::FlatMap)
		);

		app.browser.search_changed("flatmap", &mut app.shell);
		app.sync();

		assert_eq!(
			app.cursor_coordinate()
				.and_then(|(s, r)| app.browser.operator_at(s, r)),
			Some(Operator::FlatMap)
		);
	}

	#[test]
	fn responsive_detail_respects_forcing() {
		let mut app = App::new();
		app.update_detail_responsive(120);
		assert!(app.detail_enabled);
		app.update_detail_responsive(60);
		assert!(!app.detail_enabled);

		app.force_detail_pane(Some(true));
		app.update_detail_responsive(60);
		assert!(app.detail_enabled);
	}

	#[test]
	fn outcome_reflects_session_state() {
		let mut app = App::new();
		app.set_initial_query("retry");
		let outcome = app.outcome();
		assert!(!outcome.accepted);
		assert_eq!(outcome.query, "retry");

		app.tap_flat_index(1);
		app.sync();
		let outcome = app.outcome();
		assert!(outcome.accepted);
		assert_eq!(outcome.selection, Operator::Retry);
	}
}
