mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::LevelFilter;
use qsearch::{app_dirs, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let level = cli.log_level.map_or(LevelFilter::Info, LevelFilter::from);
	if level != LevelFilter::Off {
		let dir = app_dirs::get_data_dir().context("failed to locate the data directory")?;
		logging::initialize(&dir, level)?;
	}

	run_search(cli.output, resolved)
}

/// Run the picker and print the outcome in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	log::info!("searching {} root(s)", settings.roots.len());
	let outcome = qsearch::run(
		settings.session_config(),
		settings.roots.clone(),
		settings.ui_options(),
	)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
