use docpath::doc::DecoderRegistry;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// List decoder names known to a default registry.
pub fn run(args: Args) -> docpath::doc::Result<()> {
	let formats = DecoderRegistry::new().formats();

	if args.json {
		emit_json(&FormatsJson { formats });
		return Ok(());
	}

	for name in &formats {
		println!("{name}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct FormatsJson {
	formats: Vec<String>,
}
