//! Entry point for utfx's CLI tool.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::{encode_command, inspect_command};

#[derive(Parser)]
#[command(
  name = "utfx",
  bin_name = "utfx",
  version = env!("CARGO_PKG_VERSION"),
  about = "utfx is a CLI app for encoding Unicode codepoints as UTF-8",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = encode_command::ABOUT)]
  Encode(encode_command::EncodeArgs),

  #[command(about = inspect_command::ABOUT)]
  Inspect(inspect_command::InspectArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  match &cli.command {
    Commands::Encode(args) => encode_command::run(args),
    Commands::Inspect(args) => inspect_command::run(args),
  }
}
