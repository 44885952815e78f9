mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in marbles::tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.list_operators {
		print_catalog();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	marbles::logging::init(resolved.log_file.as_deref())?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_browse(cli.output, resolved)
}

/// Run the interactive browser and print output in the chosen format.
fn run_browse(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = BrowseWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Print the static catalog, one indented operator per line.
fn print_catalog() {
	for category in marbles::catalog() {
		println!("{}:", category.name);
		for operator in &category.operators {
			println!("  {operator}");
		}
	}
}
