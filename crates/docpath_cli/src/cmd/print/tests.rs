use docpath::doc::Value;
use serde_json::json;

use super::{PrintOptions, render_value};
use crate::cmd::test_support::{fixture_arg, run_docpath_stdout};

#[test]
fn nested_map_renders_indented() {
	let value = Value::from(json!({ "iso": "GB", "population": 67, "states": [{ "id": 1 }] }));
	let text = render_value(&value, PrintOptions::default());

	let expected = "{\n  iso = \"GB\"\n  population = 67\n  states = \n    [\n      {\n        id = 1\n      }\n    ]\n}\n";
	assert_eq!(text, expected);
}

#[test]
fn limits_truncate_output() {
	let options = PrintOptions {
		max_fields: 1,
		max_string_len: 3,
		max_items: 2,
		max_depth: 1,
	};

	let text = render_value(&Value::from(json!({ "a": "abcdef", "b": "x" })), options);
	assert_eq!(text, "{\n  a = \"abc...\"\n  ... 1 more fields\n}\n");

	let text = render_value(&Value::from(json!([1, 2, 3])), options);
	assert_eq!(text, "[\n  1\n  2\n  ... 1 more\n]\n");

	let text = render_value(&Value::from(json!([[1], { "k": 2 }])), options);
	assert_eq!(text, "[\n  [... 1 items]\n  { ... 1 fields }\n]\n");
}

#[test]
fn decode_command_prints_tree() {
	let stdout = run_docpath_stdout(&["decode", &fixture_arg("countries.csv")]);
	assert!(stdout.contains("format: csv"));
	assert!(stdout.contains("compression: none"));
	assert!(stdout.contains("capital = \"Dublin\""));
}
