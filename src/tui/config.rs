//! Textual configuration used when rendering the browser UI.

/// Human-readable labels and titles rendered around the list and panes.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Placeholder text shown while the query input is empty.
	pub filter_placeholder: String,
	/// Title rendered above the sectioned list.
	pub list_title: String,
	/// Title rendered above the detail pane.
	pub detail_title: String,
	/// Title rendered on the peek popup.
	pub peek_title: String,
	/// Message shown when no operator matches the query.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			filter_placeholder: "Filter operators".to_string(),
			list_title: "Operators".to_string(),
			detail_title: "Detail".to_string(),
			peek_title: "Peek".to_string(),
			empty_message: "No matching operators".to_string(),
		}
	}
}
