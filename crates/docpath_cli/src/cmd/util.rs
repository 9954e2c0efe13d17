use std::path::PathBuf;

use docpath::doc::{CsvOptions, DecoderRegistry, DocFile, FormatOptions, ReadOptions, Result, Value, XmlOptions};

/// Input file and codec flags shared by every reading command.
#[derive(clap::Args)]
pub struct SourceArgs {
	pub file: PathBuf,
	/// Decoder name; inferred from the file extension when omitted.
	#[arg(long)]
	pub format: Option<String>,
	/// CSV field separator.
	#[arg(long, default_value = ",", value_parser = parse_delimiter)]
	pub delimiter: u8,
	/// Accept CSV rows with a varying number of fields.
	#[arg(long)]
	pub flexible: bool,
	/// Key prefix marking XML attributes.
	#[arg(long = "attr-prefix", default_value = "-")]
	pub attr_prefix: String,
	/// Key holding XML character data next to child elements.
	#[arg(long = "text-key", default_value = "#text")]
	pub text_key: String,
}

/// Decoded input together with what was detected while reading it.
pub struct Loaded {
	pub file: DocFile,
	pub format: String,
	pub value: Value,
}

impl SourceArgs {
	/// Codec options described by the flags.
	pub fn format_options(&self) -> FormatOptions {
		FormatOptions {
			csv: CsvOptions {
				delimiter: self.delimiter,
				flexible: self.flexible,
				..CsvOptions::default()
			},
			xml: XmlOptions {
				attr_prefix: self.attr_prefix.clone(),
				text_key: self.text_key.clone(),
				..XmlOptions::default()
			},
		}
	}

	/// Read, decompress, and decode the input file.
	pub fn load(&self) -> Result<Loaded> {
		let registry = DecoderRegistry::with_options(self.format_options());
		let file = DocFile::open_with(&self.file, &ReadOptions::default())?;
		let format = file.resolve_format(self.format.as_deref())?.to_ascii_lowercase();
		let value = registry.decode(file.bytes(), &format)?;
		Ok(Loaded { file, format, value })
	}
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
	match value.as_bytes() {
		[byte] if byte.is_ascii() => Ok(*byte),
		_ if value == "\\t" => Ok(b'\t'),
		_ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json output failed: {err}"),
	}
}
