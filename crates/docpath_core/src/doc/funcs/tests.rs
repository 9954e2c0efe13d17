use std::sync::Arc;

use serde_json::json;

use crate::doc::{DecoderRegistry, DocError, TemplateFuncs, Value, render_output};

fn text(value: &str) -> Value {
	Value::from(value)
}

fn countries() -> Value {
	Value::from(json!([
		{ "iso": "GB", "name": "Great Britain", "states": [{ "name": "Surrey", "id": 1 }, { "name": "Kent", "id": 2 }] },
		{ "iso": "US", "name": "United States", "states": [{ "name": "Kent", "id": 5 }] }
	]))
}

#[test]
fn filter_matches_direct_field_access() {
	let funcs = TemplateFuncs::new();

	let gb = funcs.call("filter", &[countries(), text("[iso=GB]")]).expect("filter runs").expect("GB found");
	assert_eq!(render_output(gb.get("name")), "Great Britain");

	let kent = funcs.call("filter", &[countries(), text(".states.[name=Kent].id")]).expect("filter runs");
	assert_eq!(kent, Some(Value::from(json!([2, 5]))));
}

#[test]
fn filter_without_match_renders_empty() {
	let funcs = TemplateFuncs::new();
	let missing = funcs.call("filter", &[countries(), text("[iso=FR]")]).expect("filter runs");
	assert_eq!(missing, None);
	assert_eq!(render_output(missing.as_ref()), "");
}

#[test]
fn decode_operations_use_registry() {
	let funcs = TemplateFuncs::new();

	let json = funcs.call("json_decode", &[text(r#"{"a":["b","c"]}"#)]).expect("json decodes");
	assert_eq!(json, Some(Value::from(json!({ "a": ["b", "c"] }))));
	assert_eq!(funcs.call("tojson", &[text(r#"{"a":["b","c"]}"#)]).expect("alias decodes"), json);

	let xml = funcs.call("xml_decode", &[text("<a><b>B</b></a>")]).expect("xml decodes");
	assert_eq!(xml, Some(Value::from(json!({ "a": { "b": "B" } }))));

	let csv = funcs.call("csv_decode", &[text("A,B\nC,D\n")]).expect("csv decodes");
	assert_eq!(csv, Some(Value::from(json!([{ "A": "C", "B": "D" }]))));
}

#[test]
fn generic_decode_sees_custom_formats() {
	let registry = Arc::new(DecoderRegistry::new());
	registry.register("upper", |bytes: &[u8]| Ok(Value::String(String::from_utf8_lossy(bytes).to_uppercase())));
	let funcs = TemplateFuncs::with_registry(Arc::clone(&registry));

	let value = funcs.call("decode", &[text("abc"), text("UPPER")]).expect("custom decodes");
	assert_eq!(value, Some(text("ABC")));

	let err = funcs.call("decode", &[text("abc"), text("yaml")]).expect_err("yaml unknown");
	assert!(matches!(err, DocError::UnknownFormat { .. }));
}

#[test]
fn encode_operations_return_text() {
	let funcs = TemplateFuncs::new();
	let value = Value::from(json!({ "a": { "-id": "7", "b": "B" } }));

	let compact = funcs.call("json_encode", &[value.clone()]).expect("json encodes");
	assert_eq!(compact, Some(text(r#"{"a":{"-id":"7","b":"B"}}"#)));

	let pretty = funcs.call("json", &[Value::from(json!({ "k": 1 }))]).expect("pretty encodes");
	assert_eq!(pretty, Some(text("{\n  \"k\": 1\n}")));

	let xml = funcs.call("xml_encode", &[value]).expect("xml encodes");
	assert_eq!(xml, Some(text(r#"<a id="7"><b>B</b></a>"#)));

	let items = Value::from(json!([{ "iso": "GB" }]));
	let wrapped = funcs.call("xml_array", &[items, text("countries"), text("country")]).expect("array encodes");
	assert_eq!(wrapped, Some(text("<?xml version=\"1.0\"?>\n<countries><country><iso>GB</iso></country></countries>")));
}

#[test]
fn encode_failure_names_target_format() {
	let err = TemplateFuncs::new().call("xml_encode", &[text("scalar")]).expect_err("scalar root fails");
	assert!(matches!(err, DocError::EncodeFailed { format: "xml", .. }));

	let err = TemplateFuncs::new().call("xml_encode", &[Value::from(json!({ "bad key": "v" }))]).expect_err("bad name fails");
	assert_eq!(err.to_string(), "can't encode xml: \"bad key\" is not a valid xml name");
}

#[test]
fn bad_arguments_are_rejected() {
	let funcs = TemplateFuncs::new();

	let err = funcs.call("filter", &[countries()]).expect_err("missing path");
	assert!(matches!(err, DocError::InvalidArguments { function: "filter", .. }));

	let err = funcs.call("tojson", &[Value::Number(1.0)]).expect_err("number is not text");
	assert!(matches!(err, DocError::InvalidArguments { function: "json_decode", ref reason } if reason == "argument 0 must be String, got Number"));

	let err = funcs.call("xml_array", &[countries(), text("root")]).expect_err("missing item tag");
	assert_eq!(err.to_string(), "invalid arguments to xml_array: expected 3 arguments, got 2");
}

#[test]
fn unknown_function_is_rejected() {
	let err = TemplateFuncs::new().call("date", &[]).expect_err("date is not provided");
	assert!(matches!(err, DocError::UnknownFunction { ref name } if name == "date"));
}

#[test]
fn every_listed_name_is_callable() {
	let funcs = TemplateFuncs::new();
	for name in funcs.names() {
		let err = funcs.call(name, &[]).expect_err("no arguments is always wrong");
		assert!(matches!(err, DocError::InvalidArguments { .. }), "{name} returned {err:?}");
	}
}
