use std::fmt::Display;

use thiserror::Error;

use super::SettingSource;

/// A setting whose value could not be turned into its typed form.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	/// Wrap a parse error from the library, keeping its message as the reason.
	pub(crate) fn unparsable(
		key: &'static str,
		value: &str,
		origin: SettingSource,
		err: impl Display,
	) -> Self {
		Self::invalid(key, value, origin, err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use fnvsum::Algorithm;

	use super::*;

	#[test]
	fn unparsable_keeps_library_message() {
		let err = "md4".parse::<Algorithm>().unwrap_err();
		let wrapped = ConfigError::unparsable(
			"hash.algorithm",
			"md4",
			SettingSource::ConfigKey("hash.algorithm"),
			err,
		);
		assert_eq!(wrapped.value, "md4");
		assert!(wrapped.to_string().starts_with(
			"invalid value for hash.algorithm from configuration key `hash.algorithm`: unknown algorithm 'md4'"
		));
	}
}
