use clap::Args;

use crate::commands::{bytes_to_hex, parse_codepoint_args};
use crate::error::ToolError;

pub const ABOUT: &str =
  "Prints the UTF-8 encoding of Unicode codepoints, one per line";

#[derive(Args)]
pub struct InspectArgs {
  #[clap(
    help = "The codepoints to inspect, e.g. 'U+65E5'. A bare hexadecimal \
      value without the 'U+' prefix is also accepted.",
    required = true
  )]
  codepoints: Vec<String>,
}

pub fn run(args: &InspectArgs) -> Result<(), ()> {
  match perform_inspect(args) {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print("inspecting codepoints");
      Err(())
    }
  }
}

fn perform_inspect(args: &InspectArgs) -> Result<(), ToolError> {
  let codepoints = parse_codepoint_args(&args.codepoints)?;

  for codepoint in codepoints {
    let mut bytes = vec![];
    utfx::encode_codepoint(codepoint, &mut bytes);

    println!("U+{:04X}  [{}]", codepoint, bytes_to_hex(&bytes));
  }

  Ok(())
}
