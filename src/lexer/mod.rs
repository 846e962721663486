//! Lexical analysis module
//!
//! This module handles tokenization of Lox source code.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenType, Literal, OPERATORS, PUNCTUATION};
pub use scanner::{scan_tokens, ScanOutput, Scanner};
