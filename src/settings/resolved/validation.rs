use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.label.trim().is_empty() {
		return Err(ConfigError::invalid(
			"output.label",
			config.label.clone(),
			sources.source_for_label(),
			"must not be empty",
		));
	}

	if config.label.contains(['\n', '\r']) {
		return Err(ConfigError::invalid(
			"output.label",
			config.label.escape_debug().to_string(),
			sources.source_for_label(),
			"must fit on a single line",
		));
	}

	Ok(())
}
