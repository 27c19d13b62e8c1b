use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::fnv;

/// Supported FNV variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// 64-bit FNV-1a, the default.
	#[default]
	Fnv1a64,
	/// 64-bit FNV-1.
	Fnv164,
	/// 32-bit FNV-1a.
	Fnv1a32,
	/// 32-bit FNV-1.
	Fnv132,
}

/// Returned when a name does not match any [`Algorithm`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm '{name}' (expected one of: {})", Algorithm::names().join(", "))]
pub struct UnknownAlgorithm {
	pub name: String,
}

impl Algorithm {
	pub const ALL: [Algorithm; 4] = [
		Algorithm::Fnv1a64,
		Algorithm::Fnv164,
		Algorithm::Fnv1a32,
		Algorithm::Fnv132,
	];

	/// Canonical name used on the command line and in config files.
	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Fnv1a64 => "fnv1a-64",
			Algorithm::Fnv164 => "fnv1-64",
			Algorithm::Fnv1a32 => "fnv1a-32",
			Algorithm::Fnv132 => "fnv1-32",
		}
	}

	pub fn names() -> Vec<&'static str> {
		Self::ALL.iter().map(|algorithm| algorithm.name()).collect()
	}

	/// Width of the digest in bits.
	pub fn bits(self) -> u32 {
		match self {
			Algorithm::Fnv1a64 | Algorithm::Fnv164 => 64,
			Algorithm::Fnv1a32 | Algorithm::Fnv132 => 32,
		}
	}

	/// Hash `bytes`. 32-bit digests are zero-extended.
	pub fn digest(self, bytes: &[u8]) -> u64 {
		match self {
			Algorithm::Fnv1a64 => fnv::fnv1a_64(bytes),
			Algorithm::Fnv164 => fnv::fnv1_64(bytes),
			Algorithm::Fnv1a32 => u64::from(fnv::fnv1a_32(bytes)),
			Algorithm::Fnv132 => u64::from(fnv::fnv1_32(bytes)),
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = UnknownAlgorithm;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		let algorithm = match normalized.as_str() {
			"fnv1a-64" | "fnv1a64" => Algorithm::Fnv1a64,
			"fnv1-64" | "fnv164" => Algorithm::Fnv164,
			"fnv1a-32" | "fnv1a32" => Algorithm::Fnv1a32,
			"fnv1-32" | "fnv132" => Algorithm::Fnv132,
			_ => {
				return Err(UnknownAlgorithm {
					name: value.to_string(),
				});
			}
		};
		Ok(algorithm)
	}
}

impl<'de> Deserialize<'de> for Algorithm {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let name = String::deserialize(deserializer)?;
		name.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_round_trip_through_from_str() {
		for algorithm in Algorithm::ALL {
			assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
		}
	}

	#[test]
	fn parsing_accepts_aliases_and_case() {
		assert_eq!("FNV1A64".parse::<Algorithm>(), Ok(Algorithm::Fnv1a64));
		assert_eq!(" fnv132 ".parse::<Algorithm>(), Ok(Algorithm::Fnv132));
	}

	#[test]
	fn unknown_names_list_the_alternatives() {
		let err = "md5".parse::<Algorithm>().unwrap_err();
		let message = err.to_string();
		assert!(message.contains("'md5'"));
		assert!(message.contains("fnv1a-64, fnv1-64, fnv1a-32, fnv1-32"));
	}

	#[test]
	fn default_is_fnv1a_64() {
		assert_eq!(Algorithm::default(), Algorithm::Fnv1a64);
		assert_eq!(Algorithm::default().digest(b"hello"), 11_831_194_018_420_276_491);
	}

	#[test]
	fn narrow_digests_are_zero_extended() {
		assert_eq!(Algorithm::Fnv1a32.digest(b"hello"), 0x4f9f_2cab);
		assert_eq!(Algorithm::Fnv1a32.bits(), 32);
		assert_eq!(Algorithm::Fnv164.bits(), 64);
	}

	#[test]
	fn deserializes_from_a_name() {
		let algorithm: Algorithm = serde_json::from_str("\"fnv1-64\"").expect("parse");
		assert_eq!(algorithm, Algorithm::Fnv164);
		assert!(serde_json::from_str::<Algorithm>("\"sha1\"").is_err());
	}
}
