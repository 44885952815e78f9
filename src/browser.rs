//! Selection and search state for the catalog browser.
//!
//! [`Browser`] is the view-state controller: it owns the current selection and
//! query, derives the active (possibly filtered) catalog, and answers the
//! row/section queries the rendering layer needs. Outbound effects go through
//! the [`Shell`] boundary so they are visible at the call site instead of
//! being hidden in a property observer.

use tracing::debug;

use crate::catalog::{Category, Operator, catalog};
use crate::filter::filter_catalog;

/// Display payload for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
	/// Operator display name.
	pub text: &'static str,
	/// Whether this row shows the currently selected operator.
	pub is_selected: bool,
}

/// Host boundary for the two effects a browser event can trigger.
pub trait Shell {
	/// Ask the rendering layer to redraw the active list.
	fn request_re_render(&mut self);
	/// Ask the host to show the detail screen for `operator`.
	fn present_detail(&mut self, operator: Operator);
}

/// View-state controller over the static catalog.
#[derive(Debug, Clone)]
pub struct Browser {
	selected: Operator,
	query: String,
	// Present only while a non-empty query is active.
	filtered: Option<Vec<Category>>,
}

impl Default for Browser {
	fn default() -> Self {
		Self::new()
	}
}

impl Browser {
	/// A browser with the default selection and no active search.
	#[must_use]
	pub fn new() -> Self {
		Self {
			selected: Operator::Delay,
			query: String::new(),
			filtered: None,
		}
	}

	/// The currently selected operator. Always set.
	#[must_use]
	pub fn selected(&self) -> Operator {
		self.selected
	}

	/// The current search query, possibly empty.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// The catalog subset currently eligible for display.
	///
	/// The full catalog while search is inactive, the filtered subset
	/// otherwise.
	#[must_use]
	pub fn active(&self) -> &[Category] {
		self.filtered.as_deref().unwrap_or_else(|| catalog())
	}

	/// Number of visible sections.
	#[must_use]
	pub fn section_count(&self) -> usize {
		self.active().len()
	}

	/// Number of visible rows within a section.
	#[must_use]
	pub fn row_count(&self, section: usize) -> usize {
		self.active()
			.get(section)
			.map(|category| category.operators.len())
			.unwrap_or(0)
	}

	/// Header title for a section.
	#[must_use]
	pub fn section_title(&self, section: usize) -> Option<&'static str> {
		self.active().get(section).map(|category| category.name)
	}

	/// Resolve a (section, row) coordinate to an operator.
	///
	/// Out-of-range coordinates resolve to `None`; callers treat that as a
	/// no-op rather than an error.
	#[must_use]
	pub fn operator_at(&self, section: usize, row: usize) -> Option<Operator> {
		self.active()
			.get(section)?
			.operators
			.get(row)
			.copied()
	}

	/// Display content for a row, recomputed on every render.
	#[must_use]
	pub fn cell_content(&self, section: usize, row: usize) -> Option<CellContent> {
		let operator = self.operator_at(section, row)?;
		Some(CellContent {
			text: operator.name(),
			is_selected: operator == self.selected,
		})
	}

	/// A row in the active list was tapped.
	pub fn row_tapped(&mut self, section: usize, row: usize, shell: &mut impl Shell) {
		let Some(operator) = self.operator_at(section, row) else {
			return;
		};
		self.commit_selection(operator, shell);
	}

	/// A previewed operator was committed ("pop"). Equivalent to a tap, but
	/// the operator was already resolved at peek time.
	pub fn preview_committed(&mut self, operator: Operator, shell: &mut impl Shell) {
		self.commit_selection(operator, shell);
	}

	/// The search query changed. Recomputes the active catalog; the selection
	/// is untouched.
	pub fn search_changed(&mut self, text: &str, shell: &mut impl Shell) {
		self.query.clear();
		self.query.push_str(text);
		// An empty query means "search inactive": skip the filter pass and
		// serve the full catalog directly.
		self.filtered = if self.query.is_empty() {
			None
		} else {
			Some(filter_catalog(catalog(), &self.query))
		};
		debug!(query = %self.query, sections = self.section_count(), "query changed");
		shell.request_re_render();
	}

	fn commit_selection(&mut self, operator: Operator, shell: &mut impl Shell) {
		self.selected = operator;
		debug!(%operator, "selection committed");
		shell.request_re_render();
		shell.present_detail(operator);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct RecordingShell {
		re_renders: usize,
		presented: Vec<Operator>,
	}

	impl Shell for RecordingShell {
		fn request_re_render(&mut self) {
			self.re_renders += 1;
		}

		fn present_detail(&mut self, operator: Operator) {
			self.presented.push(operator);
		}
	}

	fn coordinate_of(browser: &Browser, operator: Operator) -> (usize, usize) {
		for section in 0..browser.section_count() {
			for row in 0..browser.row_count(section) {
				if browser.operator_at(section, row) == Some(operator) {
					return (section, row);
				}
			}
		}
		panic!("{operator} not visible");
	}

	#[test]
	fn default_selection_is_delay() {
		let browser = Browser::new();
		assert_eq!(browser.selected(), Operator::Delay);
		assert_eq!(browser.active(), catalog());
	}

	#[test]
	fn tapping_retry_selects_and_presents_exactly_once() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();
		let (section, row) = coordinate_of(&browser, Operator::Retry);

		browser.row_tapped(section, row, &mut shell);

		assert_eq!(browser.selected(), Operator::Retry);
		assert_eq!(shell.presented, vec![Operator::Retry]);
		assert_eq!(shell.re_renders, 1);
	}

	#[test]
	fn tap_outside_any_row_is_a_no_op() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.row_tapped(99, 0, &mut shell);
		browser.row_tapped(0, 99, &mut shell);

		assert_eq!(browser.selected(), Operator::Delay);
		assert_eq!(shell.presented, vec![]);
		assert_eq!(shell.re_renders, 0);
	}

	#[test]
	fn selection_marker_is_exact() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();
		let (section, row) = coordinate_of(&browser, Operator::Zip);
		browser.row_tapped(section, row, &mut shell);

		let mut marked = Vec::new();
		for section in 0..browser.section_count() {
			for row in 0..browser.row_count(section) {
				let cell = browser.cell_content(section, row).unwrap();
				if cell.is_selected {
					marked.push(cell.text);
				}
			}
		}
		assert_eq!(marked, vec!["Zip"]);
	}

	#[test]
	fn search_filters_the_active_catalog() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.search_changed("map", &mut shell);

		assert_eq!(browser.section_count(), 1);
		assert_eq!(browser.section_title(0), Some("Transforming"));
		assert_eq!(browser.row_count(0), 5);
		assert_eq!(shell.re_renders, 1);
		assert!(shell.presented.is_empty(), "search must not navigate");
	}

	#[test]
	fn clearing_the_query_restores_the_full_catalog() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.search_changed("zzz", &mut shell);
		assert_eq!(browser.section_count(), 0);

		browser.search_changed("", &mut shell);
		assert_eq!(browser.active(), catalog());
	}

	#[test]
	fn taps_resolve_against_the_filtered_view() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.search_changed("retry", &mut shell);
		// The only visible row is Error / Retry at (0, 0).
		browser.row_tapped(0, 0, &mut shell);

		assert_eq!(browser.selected(), Operator::Retry);
	}

	#[test]
	fn preview_commit_behaves_like_a_tap() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.preview_committed(Operator::Amb, &mut shell);

		assert_eq!(browser.selected(), Operator::Amb);
		assert_eq!(shell.presented, vec![Operator::Amb]);
		assert_eq!(shell.re_renders, 1);
	}

	#[test]
	fn selection_survives_filtering_it_out_of_view() {
		let mut browser = Browser::new();
		let mut shell = RecordingShell::default();

		browser.preview_committed(Operator::Zip, &mut shell);
		browser.search_changed("map", &mut shell);

		assert_eq!(browser.selected(), Operator::Zip);
		let any_marked = (0..browser.section_count()).any(|section| {
			(0..browser.row_count(section))
				.any(|row| browser.cell_content(section, row).unwrap().is_selected)
		});
		assert!(!any_marked, "hidden selection must not mark another row");
	}
}
