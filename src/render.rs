//! Digest values paired with the input they were computed from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Number base used when printing a digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Radix {
	/// Base 10, as printed by the original tool.
	#[default]
	Decimal,
	/// Zero-padded lowercase hexadecimal with a `0x` prefix.
	Hex,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown radix '{0}' (expected decimal or hex)")]
pub struct UnknownRadix(pub String);

impl Radix {
	pub fn name(self) -> &'static str {
		match self {
			Radix::Decimal => "decimal",
			Radix::Hex => "hex",
		}
	}
}

impl FromStr for Radix {
	type Err = UnknownRadix;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"decimal" | "dec" | "10" => Ok(Radix::Decimal),
			"hex" | "hexadecimal" | "16" => Ok(Radix::Hex),
			_ => Err(UnknownRadix(value.to_string())),
		}
	}
}

impl fmt::Display for Radix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A computed digest together with its input and algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digest {
	pub input: String,
	#[serde(serialize_with = "serialize_algorithm")]
	pub algorithm: Algorithm,
	pub value: u64,
}

impl Digest {
	/// Hash the UTF-8 bytes of `input`.
	pub fn compute(input: impl Into<String>, algorithm: Algorithm) -> Self {
		let input = input.into();
		let value = algorithm.digest(input.as_bytes());
		Self {
			input,
			algorithm,
			value,
		}
	}

	pub fn render(&self, radix: Radix) -> String {
		match radix {
			Radix::Decimal => self.value.to_string(),
			Radix::Hex => self.to_hex(),
		}
	}

	/// Hexadecimal rendering padded to the algorithm width.
	pub fn to_hex(&self) -> String {
		let width = (self.algorithm.bits() / 4) as usize;
		format!("0x{:0width$x}", self.value, width = width)
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value)
	}
}

fn serialize_algorithm<S>(algorithm: &Algorithm, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	serializer.serialize_str(algorithm.name())
}
