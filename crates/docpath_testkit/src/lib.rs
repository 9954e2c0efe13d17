//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as raw bytes.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Parse a JSON fixture into a `serde_json::Value` for expectations.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_slice(&fixture_bytes(name)).unwrap_or_else(|err| panic!("fixture {name} should be valid json: {err}"))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Path of a workspace binary, building it with cargo first.
///
/// Used when `CARGO_BIN_EXE_<name>` is not provided, as in unit tests of a
/// binary crate.
pub fn build_workspace_bin(name: &str) -> PathBuf {
	let bin = target_dir().join("debug").join(format!("{name}{}", std::env::consts::EXE_SUFFIX));

	let status = Command::new("cargo")
		.current_dir(workspace_root())
		.args(["build", "--quiet", "--bin", name])
		.status()
		.unwrap_or_else(|err| panic!("cargo build for {name} should start: {err}"));
	assert!(status.success(), "failed to build {name} binary at {}", bin.display());

	bin
}

/// Assert a command succeeded and return its stdout as text.
pub fn success_stdout(output: &Output) -> String {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Assert a command succeeded and parse its stdout as JSON.
pub fn success_json(output: &Output) -> serde_json::Value {
	let stdout = success_stdout(output);
	serde_json::from_str(&stdout).unwrap_or_else(|err| panic!("stdout should be valid json ({err}): {stdout}"))
}
