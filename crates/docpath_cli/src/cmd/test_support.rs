use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use docpath_testkit::{build_workspace_bin, fixture_path, success_json, success_stdout};

static DOCPATH_BIN: OnceLock<PathBuf> = OnceLock::new();

/// Run the `docpath` binary; the first call builds it when cargo has not.
pub(crate) fn run_docpath(args: &[&str]) -> Output {
	let bin = DOCPATH_BIN.get_or_init(|| option_env!("CARGO_BIN_EXE_docpath").map_or_else(|| build_workspace_bin("docpath"), PathBuf::from));
	Command::new(bin).args(args).output().expect("docpath command executes")
}

pub(crate) fn run_docpath_stdout(args: &[&str]) -> String {
	success_stdout(&run_docpath(args))
}

pub(crate) fn run_docpath_json(args: &[&str]) -> serde_json::Value {
	success_json(&run_docpath(args))
}

/// Fixture path as a command-line argument.
pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}
