//! Generated detail card for a single operator.
//!
//! Stands in for the full marble-diagram screen: a small schematic card shown
//! in the detail pane and inside the peek popup. Built once per operator and
//! reused when a peek is committed.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Operator, category_of};
use crate::tui::style::Theme;

/// Pre-built detail content for one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
	/// The operator this card describes.
	pub operator: Operator,
	/// Name of the category the operator belongs to.
	pub category: &'static str,
	lines: Vec<String>,
}

impl DetailView {
	/// Build the card for `operator`.
	#[must_use]
	pub fn build(operator: Operator) -> Self {
		let category = category_of(operator);
		let lines = vec![
			String::new(),
			"source  ──a───b───c───│▶".to_string(),
			format!("           {operator}"),
			"result  ──●───●───●───│▶".to_string(),
		];
		Self {
			operator,
			category,
			lines,
		}
	}

	/// Widest line of the card, in terminal columns.
	#[must_use]
	pub fn width(&self) -> usize {
		self.lines
			.iter()
			.map(|line| line.width())
			.max()
			.unwrap_or(0)
			.max(self.operator.name().width())
	}

	/// Number of content lines including the title and category header.
	#[must_use]
	pub fn height(&self) -> usize {
		self.lines.len() + 2
	}

	/// Styled text for rendering inside a pane or popup.
	#[must_use]
	pub fn to_text(&self, theme: &Theme) -> Text<'static> {
		let mut lines = Vec::with_capacity(self.height());
		lines.push(Line::from(Span::styled(
			self.operator.name(),
			theme.highlight.add_modifier(Modifier::BOLD),
		)));
		lines.push(Line::from(Span::styled(
			format!("Category: {}", self.category),
			theme.empty,
		)));
		for line in &self.lines {
			lines.push(Line::from(line.clone()));
		}
		Text::from(lines)
	}
}

#[cfg(test)]
mod tests {
	use crate::tui::style::default_theme;

	use super::*;

	#[test]
	fn card_knows_its_category() {
		let view = DetailView::build(Operator::Map);
		assert_eq!(view.category, "Transforming");
		assert_eq!(view.operator, Operator::Map);
	}

	#[test]
	fn text_leads_with_the_operator_name() {
		let view = DetailView::build(Operator::CatchError);
		let text = view.to_text(&default_theme());
		let first: String = text.lines[0]
			.spans
			.iter()
			.map(|span| span.content.clone())
			.collect();
		assert_eq!(first, "CatchError");
		assert_eq!(text.lines.len(), view.height());
	}

	#[test]
	fn width_covers_the_longest_line() {
		let view = DetailView::build(Operator::DistinctUntilChanged);
		assert!(view.width() >= "DistinctUntilChanged".len());
	}
}
