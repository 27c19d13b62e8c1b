use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	vec![
		"Effective configuration:".to_string(),
		format!(
			"  Algorithm: {} ({} bits)",
			config.algorithm,
			config.algorithm.bits()
		),
		format!("  Radix: {}", config.radix),
		format!("  Label: {}", config.label),
		format!("  Output: {}", config.format.as_str()),
	]
}
