//! Logging setup for the `fnvsum` binary.
//!
//! Log records go to stderr through `env_logger` so stdout only carries digests.
//! `RUST_LOG` directives are applied on top of the verbosity chosen with `-v`.

use log::LevelFilter;

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. Calling this more than once is harmless.
pub fn initialize(verbosity: u8) {
	let mut builder = env_logger::Builder::new();
	builder
		.filter_level(level_for(verbosity))
		.format_timestamp(None)
		.target(env_logger::Target::Stderr)
		.parse_default_env();

	if builder.try_init().is_err() {
		log::debug!("logger already initialized");
	}
}
