use std::sync::Arc;

use crate::doc::{DecoderRegistry, DocError, Result, Value, XmlOptions, encode_json, encode_json_pretty, encode_xml, encode_xml_array, evaluate};

/// Operation names understood by [`TemplateFuncs::call`].
const FUNCTION_NAMES: &[&str] = &[
	"csv_decode",
	"decode",
	"filter",
	"json",
	"json_decode",
	"json_encode",
	"tojson",
	"xml_array",
	"xml_decode",
	"xml_encode",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
	Filter,
	JsonDecode,
	XmlDecode,
	CsvDecode,
	Decode,
	JsonEncode,
	JsonPretty,
	XmlEncode,
	XmlArray,
}

impl Function {
	fn from_name(name: &str) -> Option<Self> {
		let function = match name {
			"filter" => Self::Filter,
			"json_decode" | "tojson" => Self::JsonDecode,
			"xml_decode" => Self::XmlDecode,
			"csv_decode" => Self::CsvDecode,
			"decode" => Self::Decode,
			"json_encode" => Self::JsonEncode,
			"json" => Self::JsonPretty,
			"xml_encode" => Self::XmlEncode,
			"xml_array" => Self::XmlArray,
			_ => return None,
		};
		Some(function)
	}

	fn name(self) -> &'static str {
		match self {
			Self::Filter => "filter",
			Self::JsonDecode => "json_decode",
			Self::XmlDecode => "xml_decode",
			Self::CsvDecode => "csv_decode",
			Self::Decode => "decode",
			Self::JsonEncode => "json_encode",
			Self::JsonPretty => "json",
			Self::XmlEncode => "xml_encode",
			Self::XmlArray => "xml_array",
		}
	}
}

/// Named operations a text templating engine calls into.
///
/// Decoding goes through a shared [`DecoderRegistry`], so formats registered
/// there are visible to `decode(text, format)` as well.
#[derive(Clone)]
pub struct TemplateFuncs {
	registry: Arc<DecoderRegistry>,
	xml: XmlOptions,
}

impl TemplateFuncs {
	/// Façade over a fresh registry with built-in decoders.
	pub fn new() -> Self {
		Self::with_registry(Arc::new(DecoderRegistry::new()))
	}

	/// Façade over an existing registry.
	pub fn with_registry(registry: Arc<DecoderRegistry>) -> Self {
		Self {
			registry,
			xml: XmlOptions::default(),
		}
	}

	/// Override the convention used by `xml_encode` and `xml_array`.
	pub fn with_xml_options(mut self, xml: XmlOptions) -> Self {
		self.xml = xml;
		self
	}

	/// Registry used by the decode operations.
	pub fn registry(&self) -> &Arc<DecoderRegistry> {
		&self.registry
	}

	/// Names accepted by [`Self::call`], sorted.
	pub fn names(&self) -> &'static [&'static str] {
		FUNCTION_NAMES
	}

	/// Invoke operation `name` with positional `args`.
	///
	/// `Ok(None)` is the absent result of a `filter` that matched nothing.
	pub fn call(&self, name: &str, args: &[Value]) -> Result<Option<Value>> {
		let Some(function) = Function::from_name(name) else {
			return Err(DocError::UnknownFunction { name: name.to_owned() });
		};

		log::trace!("template call {name} with {} args", args.len());
		match function {
			Function::Filter => {
				expect_arity(function, args, 2)?;
				let path = text_arg(function, args, 1)?;
				Ok(evaluate(&args[0], path))
			}
			Function::JsonDecode => self.decode_text(function, args, "json"),
			Function::XmlDecode => self.decode_text(function, args, "xml"),
			Function::CsvDecode => self.decode_text(function, args, "csv"),
			Function::Decode => {
				expect_arity(function, args, 2)?;
				let text = text_arg(function, args, 0)?;
				let format = text_arg(function, args, 1)?;
				self.registry.decode(text.as_bytes(), format).map(Some)
			}
			Function::JsonEncode => {
				expect_arity(function, args, 1)?;
				let text = encode_json(&args[0]).map_err(|cause| DocError::EncodeFailed { format: "json", cause })?;
				Ok(Some(Value::String(text)))
			}
			Function::JsonPretty => {
				expect_arity(function, args, 1)?;
				let text = encode_json_pretty(&args[0]).map_err(|cause| DocError::EncodeFailed { format: "json", cause })?;
				Ok(Some(Value::String(text)))
			}
			Function::XmlEncode => {
				expect_arity(function, args, 1)?;
				let text = encode_xml(&args[0], &self.xml).map_err(|cause| DocError::EncodeFailed { format: "xml", cause })?;
				Ok(Some(Value::String(text)))
			}
			Function::XmlArray => {
				expect_arity(function, args, 3)?;
				let root_tag = text_arg(function, args, 1)?;
				let item_tag = text_arg(function, args, 2)?;
				let text = encode_xml_array(&args[0], root_tag, item_tag, &self.xml).map_err(|cause| DocError::EncodeFailed { format: "xml", cause })?;
				Ok(Some(Value::String(text)))
			}
		}
	}

	fn decode_text(&self, function: Function, args: &[Value], format: &str) -> Result<Option<Value>> {
		expect_arity(function, args, 1)?;
		let text = text_arg(function, args, 0)?;
		self.registry.decode(text.as_bytes(), format).map(Some)
	}
}

impl Default for TemplateFuncs {
	fn default() -> Self {
		Self::new()
	}
}

fn expect_arity(function: Function, args: &[Value], count: usize) -> Result<()> {
	if args.len() == count {
		return Ok(());
	}
	Err(DocError::InvalidArguments {
		function: function.name(),
		reason: format!("expected {count} arguments, got {}", args.len()),
	})
}

fn text_arg(function: Function, args: &[Value], idx: usize) -> Result<&str> {
	let value = &args[idx];
	value.as_str().ok_or_else(|| DocError::InvalidArguments {
		function: function.name(),
		reason: format!("argument {idx} must be String, got {}", value.kind()),
	})
}

/// Text a template substitutes for a call result; absent renders empty.
pub fn render_output(value: Option<&Value>) -> String {
	value.map(Value::render).unwrap_or_default()
}

#[cfg(test)]
mod tests;
