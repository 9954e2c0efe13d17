use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::doc::{BoxError, DocError, DocFile, FormatOptions, ReadOptions, Result, Value, decode_csv, decode_json, decode_xml};

/// Shared decode function turning raw bytes into a [`Value`].
pub type Decoder = Arc<dyn Fn(&[u8]) -> std::result::Result<Value, BoxError> + Send + Sync>;

/// Mapping from format name to decoder.
///
/// A new registry carries the built-in `json`, `xml`, and `csv` decoders.
/// Names are case-insensitive and stored lowercase. The table sits behind a
/// read-write lock so a registry shared through an `Arc` may be extended
/// while other threads decode.
pub struct DecoderRegistry {
	decoders: RwLock<HashMap<String, Decoder>>,
}

impl DecoderRegistry {
	/// Registry with built-in decoders using default codec options.
	pub fn new() -> Self {
		Self::with_options(FormatOptions::default())
	}

	/// Registry with built-in decoders configured by `options`.
	pub fn with_options(options: FormatOptions) -> Self {
		let registry = Self::empty();
		let FormatOptions { csv, xml } = options;

		registry.register("json", |bytes: &[u8]| decode_json(bytes).map_err(BoxError::from));
		registry.register("xml", move |bytes: &[u8]| decode_xml(bytes, &xml).map_err(BoxError::from));
		registry.register("csv", move |bytes: &[u8]| decode_csv(bytes, &csv).map_err(BoxError::from));
		registry
	}

	/// Registry without any decoder installed.
	pub fn empty() -> Self {
		Self {
			decoders: RwLock::new(HashMap::new()),
		}
	}

	/// Install or replace the decoder for `format`.
	pub fn register<F>(&self, format: &str, decode: F)
	where
		F: Fn(&[u8]) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
	{
		let format = format.to_ascii_lowercase();
		let mut decoders = self.decoders.write().unwrap_or_else(PoisonError::into_inner);
		if decoders.insert(format.clone(), Arc::new(decode)).is_some() {
			log::debug!("replaced decoder for {format}");
		} else {
			log::debug!("registered decoder for {format}");
		}
	}

	/// Whether a decoder is registered for `format`.
	pub fn contains(&self, format: &str) -> bool {
		self.decoders
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.contains_key(&format.to_ascii_lowercase())
	}

	/// Registered format names in sorted order.
	pub fn formats(&self) -> Vec<String> {
		let mut names: Vec<String> = self.decoders.read().unwrap_or_else(PoisonError::into_inner).keys().cloned().collect();
		names.sort();
		names
	}

	/// Decode `bytes` with the decoder registered for `format`.
	pub fn decode(&self, bytes: &[u8], format: &str) -> Result<Value> {
		let format = format.to_ascii_lowercase();
		let decoder = self.decoders.read().unwrap_or_else(PoisonError::into_inner).get(&format).cloned();
		let Some(decoder) = decoder else {
			log::warn!("unknown format {format}");
			return Err(DocError::UnknownFormat { format });
		};

		log::debug!("decoding {} bytes as {format}", bytes.len());
		decoder(bytes).map_err(|cause| {
			log::warn!("can't parse {format}: {cause}");
			DocError::DecodeFailed { format, cause }
		})
	}

	/// Read `reader` to the end and decode it.
	pub fn decode_reader(&self, mut reader: impl Read, format: &str) -> Result<Value> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		self.decode(&bytes, format)
	}

	/// Read, decompress, and decode a file.
	///
	/// Without an explicit `format` the file extension names the decoder.
	pub fn read_file(&self, path: impl AsRef<Path>, format: Option<&str>) -> Result<Value> {
		self.read_file_with(path, format, &ReadOptions::default())
	}

	/// [`Self::read_file`] with explicit read limits.
	pub fn read_file_with(&self, path: impl AsRef<Path>, format: Option<&str>, options: &ReadOptions) -> Result<Value> {
		let file = DocFile::open_with(path, options)?;
		let format = file.resolve_format(format)?;
		self.decode(file.bytes(), &format)
	}
}

impl Default for DecoderRegistry {
	fn default() -> Self {
		Self::new()
	}
}
