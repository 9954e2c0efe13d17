mod compression;
mod error;
mod file;
mod format;
mod funcs;
mod path;
mod query;
mod registry;
mod value;

/// Compression detection result and byte decoding.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes};
/// Error and result aliases.
pub use error::{BoxError, DocError, Result};
/// Document file abstraction and read limits.
pub use file::{DocFile, ReadOptions, format_from_path};
/// Built-in codecs, their options, and codec-level errors.
pub use format::{
	CsvOptions, FormatError, FormatOptions, XmlOptions, decode_csv, decode_json, decode_xml, encode_csv, encode_json, encode_json_pretty, encode_xml,
	encode_xml_array, split_keys,
};
/// Named operations exposed to a text templating engine.
pub use funcs::{TemplateFuncs, render_output};
/// Path expression parser types.
pub use path::{PathSegment, Predicate, QueryPath};
/// Path evaluation entry points.
pub use query::{evaluate, evaluate_path};
/// Format decoder registry.
pub use registry::{Decoder, DecoderRegistry};
/// Decoded document value types.
pub use value::{Map, Value};
