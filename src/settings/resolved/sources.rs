use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each explicitly set value came from, for error reporting.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) algorithm: Option<SettingSource>,
	pub(crate) radix: Option<SettingSource>,
	pub(crate) label: Option<SettingSource>,
	pub(crate) format: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_algorithm(&self) -> SettingSource {
		self.algorithm
			.clone()
			.unwrap_or(SettingSource::ConfigKey("hash.algorithm"))
	}

	pub(crate) fn source_for_radix(&self) -> SettingSource {
		self.radix
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.radix"))
	}

	pub(crate) fn source_for_label(&self) -> SettingSource {
		self.label
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.label"))
	}

	pub(crate) fn source_for_format(&self) -> SettingSource {
		self.format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.format"))
	}
}
