use std::fs;
use std::path::{Path, PathBuf};

use crate::doc::compression::decode_bytes;
use crate::doc::{Compression, DocError, Result};

/// Limits applied when reading documents from disk.
#[derive(Debug, Clone)]
pub struct ReadOptions {
	/// Maximum bytes produced by zstd decompression.
	pub max_decompressed_bytes: usize,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			max_decompressed_bytes: 512 * 1024 * 1024,
		}
	}
}

/// Document bytes read from disk with compression undone.
#[derive(Debug)]
pub struct DocFile {
	/// Source path.
	pub path: PathBuf,
	/// Compression mode detected for source bytes.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl DocFile {
	/// Read a document with default limits.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, &ReadOptions::default())
	}

	/// Read a document and expand zstd frames within `options` limits.
	pub fn open_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path).inspect_err(|err| log::info!("can't open file {}: {err}", path.display()))?;
		let (compression, bytes) = decode_bytes(raw, options.max_decompressed_bytes)?;
		log::debug!("read {} ({} bytes, compression={})", path.display(), bytes.len(), compression.as_str());

		Ok(Self {
			path: path.to_path_buf(),
			compression,
			bytes,
		})
	}

	/// Return decoded raw bytes backing this file.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Format named explicitly, else inferred from the file name.
	pub fn resolve_format(&self, format: Option<&str>) -> Result<String> {
		match format {
			Some(name) => Ok(name.to_owned()),
			None => format_from_path(&self.path).ok_or_else(|| DocError::FormatNotInferred {
				path: self.path.display().to_string(),
			}),
		}
	}
}

/// Infer a format name from the file extension, ignoring a trailing `.zst`.
pub fn format_from_path(path: &Path) -> Option<String> {
	let mut path = path.to_path_buf();
	if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zst")) {
		path.set_extension("");
	}

	let ext = path.extension()?.to_str()?.to_ascii_lowercase();
	if ext.is_empty() { None } else { Some(ext) }
}
