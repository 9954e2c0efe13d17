use crate::doc::{Map, PathSegment, Predicate, QueryPath, Value};

fn field(name: &str) -> PathSegment {
	PathSegment::Field(name.to_owned())
}

fn predicate(field: &str, value: &str) -> PathSegment {
	PathSegment::Predicate(Predicate {
		field: field.to_owned(),
		value: value.to_owned(),
	})
}

#[test]
fn dotted_fields_parse_in_order() {
	let path = QueryPath::parse("a.b.c");
	assert_eq!(path.segments, vec![field("a"), field("b"), field("c")]);
}

#[test]
fn bracketed_equality_becomes_predicate() {
	let path = QueryPath::parse("data.[iso=GB].states.[name=Surrey]");
	assert_eq!(path.segments, vec![field("data"), predicate("iso", "GB"), field("states"), predicate("name", "Surrey")]);
}

#[test]
fn empty_pieces_are_wildcards() {
	assert_eq!(QueryPath::parse("a..b").segments, vec![field("a"), PathSegment::Wildcard, field("b")]);
	assert_eq!(QueryPath::parse(".a").segments, vec![PathSegment::Wildcard, field("a")]);
	assert_eq!(QueryPath::parse("a.").segments, vec![field("a"), PathSegment::Wildcard]);
	assert_eq!(QueryPath::parse("").segments, vec![PathSegment::Wildcard]);
}

#[test]
fn malformed_brackets_stay_literal_keys() {
	assert_eq!(QueryPath::parse("[noequals]").segments, vec![field("[noequals]")]);
	assert_eq!(QueryPath::parse("[=GB]").segments, vec![field("[=GB]")]);
	assert_eq!(QueryPath::parse("[iso=GB").segments, vec![field("[iso=GB")]);
}

#[test]
fn literal_keeps_text_after_first_equals() {
	assert_eq!(QueryPath::parse("[expr=a=b]").segments, vec![predicate("expr", "a=b")]);
	assert_eq!(QueryPath::parse("[code=]").segments, vec![predicate("code", "")]);
}

#[test]
fn display_reproduces_source_text() {
	for input in ["a.b.c", "data.[iso=GB]", "a..b", "rows.0.name", ""] {
		assert_eq!(QueryPath::parse(input).to_string(), input);
	}
}

#[test]
fn predicate_compares_rendered_text() {
	let test = Predicate::parse("[id=5]").expect("predicate parses");

	let mut numeric = Map::new();
	numeric.insert("id".to_owned(), Value::Number(5.0));
	let mut textual = Map::new();
	textual.insert("id".to_owned(), Value::from("5"));
	let mut other = Map::new();
	other.insert("id".to_owned(), Value::from("6"));

	assert!(test.matches(&Value::Map(numeric)));
	assert!(test.matches(&Value::Map(textual)));
	assert!(!test.matches(&Value::Map(other)));
	assert!(!test.matches(&Value::Map(Map::new())));
	assert!(!test.matches(&Value::from("5")));
}
