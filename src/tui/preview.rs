//! Peek state and popup placement.
//!
//! A peek shows a pre-built detail card in a floating popup anchored to the
//! row it was resolved from, without touching the selection. Committing the
//! peek ("pop") reuses the same card; dismissing it restores prior state
//! untouched.

use ratatui::layout::Rect;

use crate::catalog::Operator;
use crate::detail::DetailView;

/// An active peek and the row rectangle it is anchored to.
#[derive(Debug, Clone)]
pub(crate) struct Peek {
	/// Operator resolved from the row under the gesture.
	pub(crate) operator: Operator,
	/// Detail card built at peek time, reused on commit.
	pub(crate) view: DetailView,
	/// On-screen bounds of the source row, used for visual anchoring.
	pub(crate) anchor: Rect,
}

impl Peek {
	pub(crate) fn new(operator: Operator, anchor: Rect) -> Self {
		Self {
			operator,
			view: DetailView::build(operator),
			anchor,
		}
	}
}

/// Place a `width` x `height` popup near `anchor`, clamped to `frame`.
///
/// The popup opens below the anchor row when there is room, otherwise above
/// it, and is shifted left as needed to stay on screen.
pub(crate) fn popup_area(anchor: Rect, frame: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(frame.width);
	let height = height.min(frame.height);

	let below = anchor.y.saturating_add(anchor.height);
	let y = if below.saturating_add(height) <= frame.y.saturating_add(frame.height) {
		below
	} else {
		anchor.y.saturating_sub(height)
	};
	let y = y.max(frame.y);

	let max_x = frame.x.saturating_add(frame.width).saturating_sub(width);
	let x = anchor.x.min(max_x).max(frame.x);

	Rect::new(x, y, width, height)
}
