use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::RadixArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["fnvsum"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert!(parsed.inputs.is_empty());
	assert_eq!(parsed.output, None);
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn inputs_and_flags_are_collected() {
	let parsed = CliArgs::parse_from([
		"fnvsum", "-a", "fnv1-32", "-r", "hex", "-o", "json", "-vv", "foo", "bar",
	]);
	assert_eq!(parsed.inputs, vec!["foo", "bar"]);
	assert_eq!(parsed.algorithm.as_deref(), Some("fnv1-32"));
	assert_eq!(parsed.radix, Some(RadixArg::Hex));
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn output_format_names_parse_case_insensitively() {
	assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
	assert_eq!(OutputFormat::from_name(" plain "), Some(OutputFormat::Plain));
	assert_eq!(OutputFormat::from_name("yaml"), None);
}
