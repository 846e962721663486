//! # Lox Lexical Analysis
//!
//! The front end of a small Lox toolchain: converts raw source text into a
//! linear sequence of typed tokens for a parser to consume.
//!
//! ## Architecture
//!
//! - `lexer`: Token definitions and the scanner
//! - `error`: Lexical and command-line error types, diagnostics
//! - `cli`: Argument parsing and the `tokenize` command
//! - `logging`: `tracing` subscriber setup for the binary
//!
//! Scanning never fails outright. Every call yields a full token sequence
//! ending in EOF, plus whatever lexical errors were found on the way:
//!
//! ```
//! use lox_lang::{scan_tokens, TokenType};
//!
//! let output = scan_tokens("(@)");
//! assert_eq!(output.tokens.len(), 3);
//! assert_eq!(output.tokens[2].token_type, TokenType::Eof);
//! assert_eq!(output.errors[0].to_string(), "[line 1] Error: Unexpected character: @");
//! ```

pub mod cli;
pub mod error;
pub mod lexer;
pub mod logging;

// Re-export commonly used types
pub use error::{CliError, CliResult, LexicalError, ScanError};
pub use lexer::{scan_tokens, Literal, ScanOutput, Scanner, Token, TokenType};

/// Version of the Lox toolchain
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
