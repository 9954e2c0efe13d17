#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "docpath", about = "Decode CSV/XML/JSON documents and query them with dot paths")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Decode(cmd::decode::Args),
	Query(cmd::query::Args),
	Convert(cmd::convert::Args),
	Formats(cmd::formats::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> docpath::doc::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Query(args) => cmd::query::run(args),
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Formats(args) => cmd::formats::run(args),
	}
}
