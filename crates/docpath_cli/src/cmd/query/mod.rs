use docpath::doc::{QueryPath, Value, evaluate_path, render_output};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{SourceArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	pub path: String,
	/// Print container results as an indented tree instead of compact JSON.
	#[arg(long)]
	pub tree: bool,
	#[arg(long)]
	pub json: bool,
}

/// Evaluate a dot path against a decoded document.
pub fn run(args: Args) -> docpath::doc::Result<()> {
	let Args { source, path, tree, json } = args;

	let loaded = source.load()?;
	let query = QueryPath::parse(&path);
	let result = evaluate_path(&loaded.value, &query);

	if json {
		emit_json(&QueryJson {
			file: loaded.file.path.display().to_string(),
			path: query.to_string(),
			found: result.is_some(),
			value: result.as_ref(),
		});
		return Ok(());
	}

	match &result {
		Some(value @ (Value::Map(_) | Value::Sequence(_))) if tree => print!("{}", render_value(value, PrintOptions::for_query())),
		other => println!("{}", render_output(other.as_ref())),
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct QueryJson<'a> {
	file: String,
	path: String,
	found: bool,
	value: Option<&'a Value>,
}
