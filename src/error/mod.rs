//! Error handling and diagnostics for the Lox toolchain
//!
//! Lexical errors are recoverable: the scanner records them as [`ScanError`]
//! values and keeps going. [`CliError`] covers everything that goes wrong
//! around the scanner (arguments, file access) and does stop the program.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for command-line operations
pub type CliResult<T> = Result<T, CliError>;

/// A recoverable lexical fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error tagged with where it was detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: LexicalError,
    /// Line number (1-based)
    pub line: usize,
    /// Character offset into the source where the fault was detected
    pub offset: usize,
}

impl ScanError {
    /// Create a new scan error
    pub fn new(kind: LexicalError, line: usize, offset: usize) -> Self {
        Self { kind, line, offset }
    }

    /// Get the bare error message, without the line prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind)
    }
}

impl std::error::Error for ScanError {}

/// Failures of the command-line driver
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: lox tokenize <filename> [--pretty]")]
    MissingArguments,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
