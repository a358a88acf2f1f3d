mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use settings::ResolvedConfig;
use workflow::ViewerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in snipview_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list {
		logging::initialize(logging::Sink::Stderr)?;
		return run_list(cli.output, resolved);
	}

	logging::initialize(logging::Sink::File)?;
	run_viewer(cli.output, resolved)
}

/// Open the interactive viewer and print the outcome in the chosen format.
fn run_viewer(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = ViewerWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => cli::print_plain(&outcome),
		OutputFormat::Json => cli::print_json(&outcome)?,
	}

	Ok(())
}

/// Print the snippets matching the initial query without opening the UI.
fn run_list(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let items = ViewerWorkflow::from_config(settings).list()?;

	match format {
		OutputFormat::Plain => cli::print_items_plain(&items),
		OutputFormat::Json => cli::print_items_json(&items)?,
	}

	Ok(())
}
