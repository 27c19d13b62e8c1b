use anyhow::Result;
use fnvsum::{Digest, Radix};
use serde_json::json;

/// Render one plain-text line for a digest.
pub(crate) fn format_plain(digest: &Digest, label: &str, radix: Radix) -> String {
	format!(
		"The {label} hash of '{}' is '{}'",
		digest.input,
		digest.render(radix)
	)
}

/// Print each digest on its own line.
pub(crate) fn print_plain(digests: &[Digest], label: &str, radix: Radix) {
	for digest in digests {
		println!("{}", format_plain(digest, label, radix));
	}
}

/// Format the digests as a pretty-printed JSON array.
pub(crate) fn format_digests_json(digests: &[Digest]) -> Result<String> {
	let payload: Vec<_> = digests
		.iter()
		.map(|digest| {
			json!({
				"input": digest.input,
				"algorithm": digest.algorithm.name(),
				"bits": digest.algorithm.bits(),
				"digest": digest.value,
				"hex": digest.to_hex(),
			})
		})
		.collect();

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the digests.
pub(crate) fn print_json(digests: &[Digest]) -> Result<()> {
	println!("{}", format_digests_json(digests)?);
	Ok(())
}
