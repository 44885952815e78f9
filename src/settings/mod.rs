//! Layered configuration for the `marbles` binary.
//!
//! Values come from default config-file locations, explicit `--config` files,
//! `MARBLES__`-prefixed environment variables, and CLI overrides, in that
//! order of precedence.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;

use thiserror::Error;

/// Validation failures while resolving configuration.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
	#[error("unknown theme '{name}' (available: {available})")]
	UnknownTheme { name: String, available: String },
}
