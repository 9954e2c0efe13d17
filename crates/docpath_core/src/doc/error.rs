use thiserror::Error;

use crate::doc::FormatError;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DocError>;

/// Boxed error returned by decoder functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while reading, decoding, and encoding documents.
///
/// Path evaluation never fails; a missing key or mismatched shape yields an
/// absent result instead of an error.
#[derive(Debug, Error)]
pub enum DocError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decode requested for a format name with no registered decoder.
	#[error("unknown format: {format}")]
	UnknownFormat {
		/// Requested format name.
		format: String,
	},
	/// Registered decoder rejected its input.
	#[error("can't parse {format}: {cause}")]
	DecodeFailed {
		/// Format name the decoder was registered under.
		format: String,
		/// Decoder-specific failure.
		#[source]
		cause: BoxError,
	},
	/// Encoder rejected the value shape or failed to write.
	#[error("can't encode {format}: {cause}")]
	EncodeFailed {
		/// Target format name.
		format: &'static str,
		/// Codec-level failure.
		#[source]
		cause: FormatError,
	},
	/// No format was given and the file name carries no known extension.
	#[error("no format given and none could be inferred from {path}")]
	FormatNotInferred {
		/// Offending file path.
		path: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Template function name is not part of the façade.
	#[error("unknown template function: {name}")]
	UnknownFunction {
		/// Requested function name.
		name: String,
	},
	/// Template function called with the wrong number or kind of arguments.
	#[error("invalid arguments to {function}: {reason}")]
	InvalidArguments {
		/// Function name.
		function: &'static str,
		/// Human-readable description of the mismatch.
		reason: String,
	},
}
