use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// String-keyed mapping used for decoded objects, elements, and CSV rows.
pub type Map = BTreeMap<String, Value>;

/// Runtime value emitted by every format decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar, stored at double precision.
	Number(f64),
	/// Text scalar.
	String(String),
	/// Ordered sequence.
	Sequence(Vec<Value>),
	/// Mapping with unique string keys.
	Map(Map),
}

impl Value {
	/// Stable variant label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "Null",
			Self::Bool(_) => "Bool",
			Self::Number(_) => "Number",
			Self::String(_) => "String",
			Self::Sequence(_) => "Sequence",
			Self::Map(_) => "Map",
		}
	}

	/// Borrow the text of a `String` value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow the entries of a `Map` value.
	pub fn as_map(&self) -> Option<&Map> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow the items of a `Sequence` value.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Look up a direct child entry of a `Map` value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_map().and_then(|map| map.get(key))
	}

	/// Render the value as template text.
	///
	/// Scalars render bare (`5`, `true`, `GB`), `Null` renders empty, and
	/// containers render as compact JSON. Predicate filters compare against
	/// this rendering, so `Number(5.0)` and `String("5")` both equal `5`.
	pub fn render(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(flag) => flag.to_string(),
			Self::Number(number) => number.to_string(),
			Self::String(text) => text.clone(),
			Self::Sequence(_) | Self::Map(_) => serde_json::to_string(self).unwrap_or_default(),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(flag) => serializer.serialize_bool(*flag),
			Self::Number(number) => {
				if number.is_finite() && number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
					serializer.serialize_i64(*number as i64)
				} else {
					serializer.serialize_f64(*number)
				}
			}
			Self::String(text) => serializer.serialize_str(text),
			Self::Sequence(items) => serializer.collect_seq(items),
			Self::Map(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, value) in map {
					out.serialize_entry(key, value)?;
				}
				out.end()
			}
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(flag) => Self::Bool(flag),
			serde_json::Value::Number(number) => number.as_f64().map_or(Self::Null, Self::Number),
			serde_json::Value::String(text) => Self::String(text),
			serde_json::Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(entries) => Self::Map(entries.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Map> for Value {
	fn from(value: Map) -> Self {
		Self::Map(value)
	}
}
