use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

/// Run the binary from `dir` with default config discovery pointed at `dir`.
fn run_in(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
	let mut command = Command::new(env!("CARGO_BIN_EXE_fnvsum"));
	command
		.args(args)
		.current_dir(dir)
		.env("FNVSUM_CONFIG_DIR", dir.join("config-home"))
		.env_remove("FNVSUM_CONFIG")
		.env_remove("RUST_LOG");
	for (key, _) in std::env::vars() {
		if key.starts_with("FNVSUM__") {
			command.env_remove(key);
		}
	}
	for (key, value) in envs {
		command.env(key, value);
	}
	command.output().expect("spawn fnvsum")
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn default_run_prints_reference_line() {
	let dir = tempdir().unwrap();
	let output = run_in(dir.path(), &[], &[]);

	assert!(output.status.success());
	assert_eq!(
		stdout(&output),
		"The FNV6a hash of 'hello' is '11831194018420276491'\n"
	);
}

#[test]
fn each_input_gets_its_own_line() {
	let dir = tempdir().unwrap();
	let output = run_in(dir.path(), &["-r", "hex", "a", "foobar", ""], &[]);

	assert!(output.status.success());
	assert_eq!(
		stdout(&output),
		"The FNV6a hash of 'a' is '0xaf63dc4c8601ec8c'\n\
		 The FNV6a hash of 'foobar' is '0x85944171f73967e8'\n\
		 The FNV6a hash of '' is '0xcbf29ce484222325'\n"
	);
}

#[test]
fn json_output_is_machine_readable() {
	let dir = tempdir().unwrap();
	let output = run_in(dir.path(), &["--output", "json", "-a", "fnv1-64", "hello"], &[]);

	assert!(output.status.success());
	let value: Value = serde_json::from_str(&stdout(&output)).expect("json");
	assert_eq!(value[0]["input"], "hello");
	assert_eq!(value[0]["algorithm"], "fnv1-64");
	assert_eq!(value[0]["hex"], "0x7b495389bdbdd4c7");
}

#[test]
fn local_config_file_is_discovered() {
	let dir = tempdir().unwrap();
	fs::write(
		dir.path().join("fnvsum.toml"),
		"[hash]\nalgorithm = \"fnv1a-32\"\n[output]\nradix = \"hex\"\nlabel = \"FNV-1a\"\n",
	)
	.unwrap();

	let output = run_in(dir.path(), &["hello"], &[]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "The FNV-1a hash of 'hello' is '0x4f9f2cab'\n");

	let skipped = run_in(dir.path(), &["--no-config", "hello"], &[]);
	assert_eq!(
		stdout(&skipped),
		"The FNV6a hash of 'hello' is '11831194018420276491'\n"
	);
}

#[test]
fn environment_sits_between_files_and_flags() {
	let dir = tempdir().unwrap();
	fs::write(
		dir.path().join(".fnvsum.toml"),
		"[output]\nlabel = \"from-file\"\n",
	)
	.unwrap();
	let env = [("FNVSUM__OUTPUT__LABEL", "from-env")];

	let from_env = run_in(dir.path(), &["x"], &env);
	assert!(stdout(&from_env).starts_with("The from-env hash of 'x'"));

	let from_flag = run_in(dir.path(), &["--label", "from-flag", "x"], &env);
	assert!(stdout(&from_flag).starts_with("The from-flag hash of 'x'"));
}

#[test]
fn invalid_algorithm_fails_with_origin() {
	let dir = tempdir().unwrap();
	let output = run_in(
		dir.path(),
		&[],
		&[("FNVSUM__HASH__ALGORITHM", "sha256")],
	);

	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("environment variable `FNVSUM__HASH__ALGORITHM`"));
	assert!(stderr.contains("unknown algorithm 'sha256'"));
}

#[test]
fn print_config_precedes_digests() {
	let dir = tempdir().unwrap();
	let output = run_in(dir.path(), &["-p", "-a", "fnv1-32"], &[]);

	assert!(output.status.success());
	let text = stdout(&output);
	assert!(text.starts_with("Effective configuration:\n"));
	assert!(text.contains("  Algorithm: fnv1-32 (32 bits)\n"));
	assert!(text.ends_with("The FNV6a hash of 'hello' is '3069866343'\n"));
}
