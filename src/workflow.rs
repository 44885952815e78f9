use anyhow::Result;
use marbles::{App, BrowseOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browser.
pub(crate) struct BrowseWorkflow {
	app: App<'static>,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			initial_query,
			theme,
			detail_pane,
			..
		} = config;

		let mut app = App::new();
		app.set_theme(theme);
		app.force_detail_pane(detail_pane);
		app.set_initial_query(&initial_query);

		Self { app }
	}

	pub(crate) fn run(mut self) -> Result<BrowseOutcome> {
		self.app.run()
	}
}
