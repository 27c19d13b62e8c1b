mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use fnvsum::Digest;
use settings::ResolvedConfig;
use workflow::HashWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	fnvsum::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let digests = HashWorkflow::new(&resolved, cli.inputs).run();
	emit(&resolved, &digests)
}

/// Print the computed digests in the configured format.
fn emit(settings: &ResolvedConfig, digests: &[Digest]) -> Result<()> {
	match settings.format {
		OutputFormat::Plain => print_plain(digests, &settings.label, settings.radix),
		OutputFormat::Json => print_json(digests)?,
	}

	Ok(())
}
