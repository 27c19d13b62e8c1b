//! Resolve the configuration directory for `fnvsum`.
//!
//! The `FNVSUM_CONFIG_DIR` environment variable takes precedence over the
//! platform location provided by the `dirs` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

const APPLICATION: &str = "fnvsum";

pub const CONFIG_DIR_ENV: &str = "FNVSUM_CONFIG_DIR";

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	let base = dirs::config_dir().ok_or_else(|| anyhow!("unable to determine config directory"))?;
	Ok(base.join(APPLICATION))
}
