//! Canonical formatting of HCL configuration text.
//!
//! The generator assembles configuration without any indentation; this
//! module parses that text and prints it back in canonical layout:
//!
//! - nested blocks and multi-line lists are indented by
//!   [`FormatOptions::indent`] spaces per level
//! - runs of literal assignments on consecutive lines have their `=` signs
//!   aligned
//! - a blank line separates each run, block and multi-line list inside a
//!   body, and each top-level block
//! - lists written across several lines keep one element per line, each
//!   followed by a comma; lists written on one line stay on one line
//!
//! Parsing also validates the text: anything that is not well-formed HCL
//! is reported as a [`FormatError`] with the position of the offending
//! token. Comments are accepted but not preserved.
//!
//! # Example
//!
//! ```rust
//! use terraconf::format::{format_config, FormatOptions};
//!
//! let raw = "resource \"aws_eip\" \"lb\" {\nvpc = \"true\"\ninstance = \"i-123\"\n}\n";
//! let formatted = format_config(raw, &FormatOptions::default()).unwrap();
//! assert_eq!(
//!     formatted,
//!     "resource \"aws_eip\" \"lb\" {\n  vpc      = \"true\"\n  instance = \"i-123\"\n}\n"
//! );
//! ```

mod parser;
mod printer;

pub use parser::is_identifier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_INDENT;

/// Layout settings for [`format_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Align the `=` of adjacent single-line assignments.
    pub align_equals: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            align_equals: true,
        }
    }
}

/// The text handed to the formatter is not valid HCL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("At {line}:{column}: {message}")]
pub struct FormatError {
    /// 1-based line of the offending token
    pub line: usize,
    /// 1-based column of the offending token
    pub column: usize,
    /// What the parser expected or found
    pub message: String,
}

/// Parse `source` as HCL and print it in canonical layout.
pub fn format_config(source: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let items = parser::parse_file(source)?;
    Ok(printer::Printer::new(options).print_file(&items))
}
