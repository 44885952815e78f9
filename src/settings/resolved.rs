use std::path::PathBuf;

use marbles::Theme;

/// Fully validated configuration the workflow runs with.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	/// Query applied before the first draw.
	pub(crate) initial_query: String,
	/// The active color theme.
	pub(crate) theme: Theme,
	/// Name the theme was resolved from, kept for diagnostics.
	pub(crate) theme_name: String,
	/// Detail pane forcing; `None` sizes it responsively.
	pub(crate) detail_pane: Option<bool>,
	/// Tracing output file; `None` disables logging.
	pub(crate) log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Print a human-readable summary of the resolved values.
	pub(crate) fn print_summary(&self) {
		println!("theme: {}", self.theme_name);
		println!("initial query: {:?}", self.initial_query);
		match self.detail_pane {
			Some(enabled) => println!("detail pane: {}", if enabled { "on" } else { "off" }),
			None => println!("detail pane: responsive"),
		}
		match &self.log_file {
			Some(path) => println!("log file: {}", path.display()),
			None => println!("log file: disabled"),
		}
	}
}
