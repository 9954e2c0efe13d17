use docpath::doc::{DocError, FormatError, encode_csv, encode_json_pretty, encode_xml, split_keys};

use crate::cmd::util::SourceArgs;

/// Output encodings supported by `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
	Json,
	Xml,
	Csv,
}

impl Target {
	fn as_str(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Xml => "xml",
			Self::Csv => "csv",
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	#[arg(long, value_enum)]
	pub to: Target,
}

/// Decode one document and write it back out in another format.
pub fn run(args: Args) -> docpath::doc::Result<()> {
	let Args { source, to } = args;

	let loaded = source.load()?;
	let options = source.format_options();
	let format = to.as_str();
	let wrap = |cause: FormatError| DocError::EncodeFailed { format, cause };
	log::debug!("converting {} from {} to {format}", loaded.file.path.display(), loaded.format);

	match to {
		Target::Json => println!("{}", encode_json_pretty(&loaded.value).map_err(wrap)?),
		Target::Xml => println!("{}", encode_xml(&loaded.value, &options.xml).map_err(wrap)?),
		Target::Csv => {
			let (columns, rows) = split_keys(&loaded.value).map_err(wrap)?;
			let bytes = encode_csv(&columns, &rows, &options.csv).map_err(wrap)?;
			print!("{}", String::from_utf8_lossy(&bytes));
		}
	}
	Ok(())
}
