mod csv;
mod json;
mod xml;

use thiserror::Error;

pub use self::csv::{decode_csv, encode_csv, split_keys};
pub use self::json::{decode_json, encode_json, encode_json_pretty};
pub use self::xml::{decode_xml, encode_xml, encode_xml_array};

/// Codec-level failures reported by the built-in decoders and encoders.
#[derive(Debug, Error)]
pub enum FormatError {
	/// Malformed JSON text.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Malformed XML markup.
	#[error("xml: {0}")]
	Xml(#[from] quick_xml::Error),
	/// Malformed XML attribute.
	#[error("xml attribute: {0}")]
	XmlAttr(#[from] quick_xml::events::attributes::AttrError),
	/// Malformed CSV record or writer failure.
	#[error("csv: {0}")]
	Csv(#[from] ::csv::Error),
	/// Input bytes were not valid UTF-8.
	#[error("utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),
	/// Writer flush failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// CSV input had no header row.
	#[error("csv header row is missing")]
	MissingHeader,
	/// XML input contained no element.
	#[error("xml document has no root element")]
	MissingRoot,
	/// XML input ended inside an element.
	#[error("xml element <{name}> is not closed")]
	UnclosedElement {
		/// Innermost open element.
		name: String,
	},
	/// XML closing tag with nothing open.
	#[error("xml closing tag </{name}> has no matching start")]
	UnmatchedEnd {
		/// Closing tag name.
		name: String,
	},
	/// Value shape cannot be written in the target format.
	#[error("expected {expected}, got {got}")]
	UnexpectedShape {
		/// Required shape.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// Map key or tag cannot be written as an XML element or attribute name.
	#[error("{name:?} is not a valid xml name")]
	InvalidXmlName {
		/// Offending name.
		name: String,
	},
	/// CSV cell is not text.
	#[error("csv row {row} column {column}: type is {got}, expected String")]
	CsvCell {
		/// Zero-based data row index.
		row: usize,
		/// Column name.
		column: String,
		/// Actual value kind, or `missing`.
		got: &'static str,
	},
}

/// CSV reader and writer settings.
#[derive(Debug, Clone)]
pub struct CsvOptions {
	/// Field separator byte.
	pub delimiter: u8,
	/// Accept rows whose field count differs from the header.
	pub flexible: bool,
	/// Trim surrounding whitespace from headers and fields.
	pub trim: bool,
}

impl Default for CsvOptions {
	fn default() -> Self {
		Self {
			delimiter: b',',
			flexible: false,
			trim: false,
		}
	}
}

impl CsvOptions {
	/// Preset for tab-separated exports.
	pub fn tsv() -> Self {
		Self {
			delimiter: b'\t',
			..Self::default()
		}
	}
}

/// XML to value mapping convention.
#[derive(Debug, Clone)]
pub struct XmlOptions {
	/// Prefix prepended to attribute names when stored as map keys.
	pub attr_prefix: String,
	/// Key holding character data of elements that also have children or attributes.
	pub text_key: String,
	/// Drop whitespace around text nodes.
	pub trim_text: bool,
}

impl Default for XmlOptions {
	fn default() -> Self {
		Self {
			attr_prefix: "-".to_owned(),
			text_key: "#text".to_owned(),
			trim_text: true,
		}
	}
}

/// Options for every built-in codec.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
	/// CSV settings.
	pub csv: CsvOptions,
	/// XML settings.
	pub xml: XmlOptions,
}
