use docpath::doc::Value;

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{SourceArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode one document and print its value tree.
pub fn run(args: Args) -> docpath::doc::Result<()> {
	let Args {
		source,
		max_depth,
		max_items,
		json,
	} = args;

	let loaded = source.load()?;

	if json {
		emit_json(&DecodeJson {
			path: loaded.file.path.display().to_string(),
			format: &loaded.format,
			compression: loaded.file.compression.as_str(),
			value: &loaded.value,
		});
		return Ok(());
	}

	let mut options = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	if let Some(max_items) = max_items {
		options.max_items = max_items;
	}

	println!("path: {}", loaded.file.path.display());
	println!("format: {}", loaded.format);
	println!("compression: {}", loaded.file.compression.as_str());
	println!("decoded:");
	print!("{}", render_value(&loaded.value, options));

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson<'a> {
	path: String,
	format: &'a str,
	compression: &'static str,
	value: &'a Value,
}
