use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use marbles::tui::style;

use crate::cli::CliArgs;

use super::SettingsError;
use super::resolved::ResolvedConfig;

const DEFAULT_THEME: &str = "marble";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	log: LogSection,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	theme: Option<String>,
	detail_pane: Option<bool>,
}

/// Logging configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(detail_pane) = cli.detail_pane {
			self.ui.detail_pane = Some(detail_pane);
		}
		if let Some(log_file) = cli.log_file.clone() {
			self.log.file = Some(log_file);
		}
	}

	/// Validate the combined values and produce the resolved configuration.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| SettingsError::UnknownTheme {
			name: theme_name.clone(),
			available: style::names().join(", "),
		})?;

		Ok(ResolvedConfig {
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			theme_name,
			detail_pane: self.ui.detail_pane,
			log_file: self.log.file,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use config::{Config, File};

	use super::super::sources::build_config;
	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut full = vec!["marbles"];
		full.extend_from_slice(args);
		CliArgs::parse_from(full)
	}

	#[test]
	fn defaults_resolve_to_the_marble_theme() {
		let resolved = RawConfig::default().resolve().unwrap();
		assert_eq!(resolved.theme_name, "marble");
		assert_eq!(resolved.initial_query, "");
		assert_eq!(resolved.detail_pane, None);
	}

	#[test]
	fn unknown_theme_is_rejected_with_the_available_names() {
		let mut raw = RawConfig::default();
		raw.ui.theme = Some("sparkle".to_string());
		let err = raw.resolve().unwrap_err();
		assert!(err.to_string().contains("sparkle"));
		assert!(err.to_string().contains("marble"));
	}

	#[test]
	fn cli_overrides_win_over_file_values() {
		let mut raw = RawConfig::default();
		raw.ui.initial_query = Some("zip".to_string());
		raw.ui.theme = Some("light".to_string());

		raw.apply_cli_overrides(&cli(&["--query", "map", "--theme", "mono"]));
		let resolved = raw.resolve().unwrap();
		assert_eq!(resolved.initial_query, "map");
		assert_eq!(resolved.theme_name, "mono");
	}

	#[test]
	fn config_file_values_are_deserialized() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.unwrap();
		writeln!(
			file,
			"[ui]\ninitial_query = \"merge\"\ntheme = \"light\"\ndetail_pane = true\n\n[log]\nfile = \"/tmp/marbles.log\""
		)
		.unwrap();

		let config = Config::builder()
			.add_source(File::from(file.path().to_path_buf()))
			.build()
			.unwrap();
		let raw: RawConfig = config.try_deserialize().unwrap();
		let resolved = raw.resolve().unwrap();

		assert_eq!(resolved.initial_query, "merge");
		assert_eq!(resolved.theme_name, "light");
		assert_eq!(resolved.detail_pane, Some(true));
		assert!(resolved.log_file.is_some());
	}

	#[test]
	fn explicit_config_files_participate_in_the_builder() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.unwrap();
		writeln!(file, "[ui]\ntheme = \"mono\"").unwrap();

		let path = file.path().display().to_string();
		let cli = cli(&["--no-config", "--config", &path]);
		let builder = build_config(&cli).unwrap();
		let raw: RawConfig = builder.try_deserialize().unwrap();
		assert_eq!(raw.ui.theme.as_deref(), Some("mono"));
	}
}
