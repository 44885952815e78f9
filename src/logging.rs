//! Tracing setup for the terminal application.
//!
//! Logs go to a file rather than the terminal so the TUI screen stays clean.
//! Logging is off unless a log file is configured.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, writing to `log_file`.
///
/// Does nothing when no log file is configured. The filter honors
/// `RUST_LOG` and defaults to `marbles=info`.
pub fn init(log_file: Option<&Path>) -> Result<()> {
	let Some(path) = log_file else {
		return Ok(());
	};

	let file = File::create(path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marbles=info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.init();

	Ok(())
}
