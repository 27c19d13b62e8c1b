use fnvsum::{Algorithm, Digest};
use log::trace;

use crate::settings::ResolvedConfig;

/// Input hashed when none is given on the command line.
pub(crate) const DEFAULT_INPUT: &str = "hello";

/// Hashes each command-line input with the resolved algorithm.
pub(crate) struct HashWorkflow {
	algorithm: Algorithm,
	inputs: Vec<String>,
}

impl HashWorkflow {
	pub(crate) fn new(config: &ResolvedConfig, inputs: Vec<String>) -> Self {
		let inputs = if inputs.is_empty() {
			vec![DEFAULT_INPUT.to_string()]
		} else {
			inputs
		};

		Self {
			algorithm: config.algorithm,
			inputs,
		}
	}

	pub(crate) fn run(self) -> Vec<Digest> {
		let algorithm = self.algorithm;
		self.inputs
			.into_iter()
			.map(|input| {
				let digest = Digest::compute(input, algorithm);
				trace!("{} of {:?} = {:#x}", algorithm, digest.input, digest.value);
				digest
			})
			.collect()
	}
}
