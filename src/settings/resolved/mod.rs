use fnvsum::{Algorithm, Radix};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Label printed in plain output unless overridden.
pub(crate) const DEFAULT_LABEL: &str = "FNV6a";

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) algorithm: Algorithm,
	pub(crate) radix: Radix,
	pub(crate) label: String,
	pub(crate) format: OutputFormat,
}

impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			algorithm: Algorithm::default(),
			radix: Radix::default(),
			label: DEFAULT_LABEL.to_string(),
			format: OutputFormat::default(),
		}
	}
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
