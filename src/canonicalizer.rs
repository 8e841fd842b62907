//! Canonical printing of Rust source text.
//!
//! This module wraps the external canonicalization routine: `syn` parses the
//! full source file and `prettyplease` re-emits it in its standard style.
//! Parsing is all-or-nothing, so syntactically invalid input never produces
//! partially formatted output. Comments do not survive the trip through the
//! AST printer.

use crate::config::{Config, LineEnding};
use crate::detect_line_ending;

/// Errors that can occur while canonicalizing source text.
#[derive(Debug)]
pub enum FormatError {
    /// Input is not syntactically valid Rust
    Parse {
        message: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse {
                message,
                line,
                column,
            } => {
                write!(f, "parse error at line {}, column {}: {}", line, column, message)
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<syn::Error> for FormatError {
    fn from(e: syn::Error) -> Self {
        let start = e.span().start();
        Self::Parse {
            message: e.to_string(),
            line: start.line,
            column: start.column + 1,
        }
    }
}

/// Canonicalize Rust source text.
///
/// Line endings are normalized to `\n` before parsing and restored on the
/// way out according to `config.line_ending`.
///
/// # Arguments
/// * `input` - The Rust source text to canonicalize
/// * `config` - Output configuration
///
/// # Returns
/// * `Ok(String)` - The canonical form of the input
/// * `Err(FormatError)` - Parse failure details if the input is invalid
pub fn canonicalize(input: &str, config: &Config) -> Result<String, FormatError> {
    let line_ending = detect_line_ending(input);

    let normalized_input = input.replace("\r\n", "\n");

    let file = syn::parse_file(&normalized_input)?;
    let out = prettyplease::unparse(&file);

    log::debug!("canonicalized {} bytes -> {} bytes", input.len(), out.len());

    let crlf = match config.line_ending {
        LineEnding::Auto => line_ending == "\r\n",
        LineEnding::Lf => false,
        LineEnding::Crlf => true,
    };

    if crlf {
        Ok(out.replace('\n', "\r\n"))
    } else {
        Ok(out)
    }
}
