mod app_dirs;
mod catalog;
mod cli;
mod git;
mod message;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::CommitWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_commit(cli.output, resolved)
}

/// Drive the interactive flow and print the outcome in the chosen format.
fn run_commit(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = CommitWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
