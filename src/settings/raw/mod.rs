use std::env;

use anyhow::{Error, Result};
use fnvsum::{Algorithm, Radix};
use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	hash: HashSection,
	output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct HashSection {
	algorithm: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	radix: Option<String>,
	label: Option<String>,
	format: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(algorithm) = &cli.algorithm {
			self.hash.algorithm = Some(algorithm.clone());
		}
		if let Some(radix) = cli.radix {
			self.output.radix = Some(radix.as_str().to_string());
		}
		if let Some(label) = &cli.label {
			self.output.label = Some(label.clone());
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			algorithm: detect_source(
				cli.algorithm.is_some(),
				self.hash.algorithm.is_some(),
				"FNVSUM__HASH__ALGORITHM",
				"--algorithm",
				"hash.algorithm",
			),
			radix: detect_source(
				cli.radix.is_some(),
				self.output.radix.is_some(),
				"FNVSUM__OUTPUT__RADIX",
				"--radix",
				"output.radix",
			),
			label: detect_source(
				cli.label.is_some(),
				self.output.label.is_some(),
				"FNVSUM__OUTPUT__LABEL",
				"--label",
				"output.label",
			),
			format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"FNVSUM__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
		};

		let defaults = ResolvedConfig::default();

		let algorithm = match self.hash.algorithm {
			Some(name) => name.parse::<Algorithm>().map_err(|err| {
				ConfigError::unparsable("hash.algorithm", &name, sources.source_for_algorithm(), err)
			})?,
			None => defaults.algorithm,
		};

		let radix = match self.output.radix {
			Some(name) => name.parse::<Radix>().map_err(|err| {
				ConfigError::unparsable("output.radix", &name, sources.source_for_radix(), err)
			})?,
			None => defaults.radix,
		};

		let format = match self.output.format {
			Some(name) => OutputFormat::from_name(&name).ok_or_else(|| {
				ConfigError::invalid(
					"output.format",
					name.clone(),
					sources.source_for_format(),
					"expected plain or json",
				)
			})?,
			None => defaults.format,
		};

		let config = ResolvedConfig {
			algorithm,
			radix,
			label: self.output.label.unwrap_or(defaults.label),
			format,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
