use crate::doc::{FormatError, Value};

/// Decode JSON text of any top-level shape.
pub fn decode_json(bytes: &[u8]) -> Result<Value, FormatError> {
	let parsed: serde_json::Value = serde_json::from_slice(bytes)?;
	Ok(Value::from(parsed))
}

/// Encode as compact JSON.
pub fn encode_json(value: &Value) -> Result<String, FormatError> {
	Ok(serde_json::to_string(value)?)
}

/// Encode as two-space indented JSON.
pub fn encode_json_pretty(value: &Value) -> Result<String, FormatError> {
	Ok(serde_json::to_string_pretty(value)?)
}
