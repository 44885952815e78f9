use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};

use marbles::app_dirs;

use super::output::OutputFormat;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("marbles {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "marbles",
	version,
	long_version = long_version(),
	about = "Browse a catalog of reactive-stream operators in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `marbles` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MARBLES_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,

	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,

	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Initial search query applied before the first draw"
	)]
	pub(crate) query: Option<String>,

	#[arg(long, value_name = "NAME", help = "Color theme to use")]
	pub(crate) theme: Option<String>,

	#[arg(
		long = "detail-pane",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Force the detail pane on or off (default: sized responsively)"
	)]
	pub(crate) detail_pane: Option<bool>,

	#[arg(
		long,
		value_enum,
		default_value = "plain",
		help = "Format used to print the final selection"
	)]
	pub(crate) output: OutputFormat,

	#[arg(
		long = "log-file",
		value_name = "FILE",
		env = "MARBLES_LOG",
		help = "Write tracing output to this file (default: logging disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,

	#[arg(long, help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,

	#[arg(long, help = "Print the operator catalog and exit")]
	pub(crate) list_operators: bool,

	#[arg(long, help = "Print the resolved configuration before starting")]
	pub(crate) print_config: bool,
}
