pub mod encode_command;
pub mod inspect_command;

use utfx::Codepoint;

use crate::error::ToolError;

/// Parses codepoint arguments given on the command line, e.g. `"U+65E5"`,
/// into their integer values.
///
pub fn parse_codepoint_args(
  args: &[String],
) -> Result<Vec<Codepoint>, ToolError> {
  args
    .iter()
    .map(|arg| {
      utfx::codepoint_from_string(arg).map_err(|details| {
        ToolError::InvalidCodepoint {
          argument: arg.clone(),
          details,
        }
      })
    })
    .collect()
}

/// Formats bytes as hexadecimal digits, e.g. `E6 97 A5`.
///
pub fn bytes_to_hex(bytes: &[u8]) -> String {
  bytes
    .iter()
    .map(|byte| format!("{:02X}", byte))
    .collect::<Vec<_>>()
    .join(" ")
}
