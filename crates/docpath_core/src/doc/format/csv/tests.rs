use serde_json::json;

use crate::doc::{CsvOptions, FormatError, Value, decode_csv, encode_csv, split_keys};

#[test]
fn header_keys_each_row() {
	let value = decode_csv(b"A,B\nC,D\n", &CsvOptions::default()).expect("csv decodes");
	assert_eq!(value, Value::from(json!([{ "A": "C", "B": "D" }])));
}

#[test]
fn numeric_looking_cells_stay_strings() {
	let value = decode_csv(b"id,qty\n1,2.50\n", &CsvOptions::default()).expect("csv decodes");
	assert_eq!(value, Value::from(json!([{ "id": "1", "qty": "2.50" }])));
}

#[test]
fn header_only_input_yields_empty_sequence() {
	let value = decode_csv(b"A,B\n", &CsvOptions::default()).expect("csv decodes");
	assert_eq!(value, Value::Sequence(Vec::new()));
}

#[test]
fn missing_header_is_rejected() {
	let err = decode_csv(b"", &CsvOptions::default()).expect_err("empty input has no header");
	assert!(matches!(err, FormatError::MissingHeader));
}

#[test]
fn ragged_rows_fail_unless_flexible() {
	let input = b"A,B,C\n1,2\n";
	let err = decode_csv(input, &CsvOptions::default()).expect_err("short row fails");
	assert!(matches!(err, FormatError::Csv(_)));

	let flexible = CsvOptions {
		flexible: true,
		..CsvOptions::default()
	};
	let value = decode_csv(input, &flexible).expect("flexible csv decodes");
	assert_eq!(value, Value::from(json!([{ "A": "1", "B": "2" }])));
}

#[test]
fn quoted_fields_and_custom_delimiter() {
	let value = decode_csv(b"name\tnote\n\"Smith, J\"\t\"said \"\"hi\"\"\"\n", &CsvOptions::tsv()).expect("tsv decodes");
	assert_eq!(value, Value::from(json!([{ "name": "Smith, J", "note": "said \"hi\"" }])));
}

#[test]
fn trim_option_strips_whitespace() {
	let options = CsvOptions {
		trim: true,
		..CsvOptions::default()
	};
	let value = decode_csv(b" A , B \n C , D \n", &options).expect("csv decodes");
	assert_eq!(value, Value::from(json!([{ "A": "C", "B": "D" }])));
}

#[test]
fn encoded_rows_decode_back() {
	let rows = Value::from(json!([
		{ "iso": "GB", "name": "Great Britain" },
		{ "iso": "US", "name": "United States, The" }
	]));
	let (columns, items) = split_keys(&rows).expect("rows split");
	assert_eq!(columns, vec!["iso".to_owned(), "name".to_owned()]);

	let bytes = encode_csv(&columns, &items, &CsvOptions::default()).expect("csv encodes");
	assert_eq!(decode_csv(&bytes, &CsvOptions::default()).expect("csv re-decodes"), rows);
}

#[test]
fn non_string_cell_is_rejected() {
	let rows = vec![Value::from(json!({ "id": 5 }))];
	let err = encode_csv(&["id".to_owned()], &rows, &CsvOptions::default()).expect_err("number cell fails");
	assert!(matches!(err, FormatError::CsvCell { row: 0, ref column, got: "Number" } if column == "id"));

	let err = encode_csv(&["missing".to_owned()], &rows, &CsvOptions::default()).expect_err("missing cell fails");
	assert!(matches!(err, FormatError::CsvCell { got: "missing", .. }));
}

#[test]
fn split_keys_accepts_single_map() {
	let value = Value::from(json!({ "b": "2", "a": "1" }));
	let (columns, rows) = split_keys(&value).expect("map splits");
	assert_eq!(columns, vec!["a".to_owned(), "b".to_owned()]);
	assert_eq!(rows, vec![value]);

	let err = split_keys(&Value::from("scalar")).expect_err("scalar cannot split");
	assert!(matches!(err, FormatError::UnexpectedShape { got: "String", .. }));
}
