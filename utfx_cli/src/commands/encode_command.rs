use std::io::Write;

use clap::Args;

use crate::commands::{bytes_to_hex, parse_codepoint_args};
use crate::error::ToolError;

pub const ABOUT: &str = "Encodes Unicode codepoints into UTF-8 bytes";

#[derive(Args)]
pub struct EncodeArgs {
  #[clap(
    help = "The codepoints to encode, e.g. 'U+65E5'. A bare hexadecimal \
      value without the 'U+' prefix is also accepted.",
    required_unless_present = "ascii"
  )]
  codepoints: Vec<String>,

  #[arg(
    long,
    conflicts_with = "codepoints",
    help = "An ASCII string to encode instead of a list of codepoints"
  )]
  ascii: Option<String>,

  #[arg(
    long,
    default_value_t = false,
    help = "Whether to print the encoded bytes as hexadecimal digits rather \
      than writing them to stdout unaltered"
  )]
  hex: bool,
}

pub fn run(args: &EncodeArgs) -> Result<(), ()> {
  match perform_encode(args) {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print("encoding codepoints");
      Err(())
    }
  }
}

fn perform_encode(args: &EncodeArgs) -> Result<(), ToolError> {
  let codepoints = match &args.ascii {
    Some(ascii) => utfx::ascii_to_codepoints(ascii),
    None => parse_codepoint_args(&args.codepoints)?,
  };

  let bytes = utfx::encode(&codepoints);

  if args.hex {
    println!("{}", bytes_to_hex(&bytes));

    Ok(())
  } else {
    std::io::stdout()
      .write_all(&bytes)
      .map_err(|e| ToolError::FileError {
        when: "Writing to stdout".to_string(),
        details: e.to_string(),
      })
  }
}
