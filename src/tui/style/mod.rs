//! Visual styling utilities.
//!
//! Themes represent the color schemes applied to the terminal UI. Additional
//! styling options can be layered alongside themes in the future.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
