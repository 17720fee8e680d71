//! Defines the type used to describe errors that can occur when running a
//! CLI command.

use owo_colors::{OwoColorize, Stream::Stdout};

/// An error that occurred when running a CLI command. The encoder itself
/// never fails, so these only describe problems with the command's own
/// arguments and output streams.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ToolError {
  /// This error occurs when a codepoint argument given on the command line
  /// can't be parsed.
  InvalidCodepoint { argument: String, details: String },

  /// This error occurs when there is an error with an underlying file or
  /// file stream.
  FileError { when: String, details: String },
}

impl std::fmt::Display for ToolError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "utfx error: {}", self.name())
  }
}

impl ToolError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      ToolError::InvalidCodepoint { .. } => "Invalid codepoint",
      ToolError::FileError { .. } => "File I/O failure",
    }
  }

  /// Returns lines of text that describe the error in a human-readable
  /// format.
  ///
  pub fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("utfx error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match self {
      ToolError::InvalidCodepoint { argument, details } => {
        lines.push(format!("  Argument: {}", argument));
        lines.push(format!("  Details: {}", details));
      }

      ToolError::FileError { when, details } => {
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Details: {}", details));
      }
    }

    lines
  }

  /// Prints details on the error to stderr. This will include all details
  /// and contextual information stored in the error.
  ///
  pub fn print(&self, task_description: &str) {
    eprintln!();
    eprintln!("{}", "-----".if_supports_color(Stdout, |text| text.red()));

    for line in self.to_lines(task_description) {
      eprintln!("{}", line.if_supports_color(Stdout, |text| text.red()));
    }

    eprintln!();
  }
}
