//! Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into tokens.
//! Lexical errors never stop the scan: they are collected next to the tokens
//! and the scanner resumes on the following character.

use tracing::{debug, trace};

use super::token::{Literal, Token, TokenType};
use crate::error::{LexicalError, ScanError};

/// Everything a single pass over a source buffer produces
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Recognised tokens, always terminated by exactly one EOF token
    pub tokens: Vec<Token>,
    /// Lexical errors in source order
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a source buffer in one pass
pub fn scan_tokens(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// Outcome of dispatching on one character
enum Step {
    Token(TokenType, Option<Literal>),
    Skip,
    Error { kind: LexicalError, offset: usize },
}

/// Scanner for Lox source code
///
/// A scanner is consumed by [`Scanner::scan_tokens`]; build a new one for
/// every source buffer.
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scan the whole source buffer
    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;

            match self.scan_token() {
                Step::Token(token_type, literal) => self.add_token(token_type, literal),
                Step::Skip => {}
                Step::Error { kind, offset } => self.add_error(kind, offset),
            }
        }

        self.tokens.push(Token::eof(self.line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan complete"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Scan a single token
    fn scan_token(&mut self) -> Step {
        let c = self.advance();

        match c {
            // Whitespace (skip)
            ' ' | '\r' | '\t' => Step::Skip,

            '\n' => {
                self.line += 1;
                Step::Skip
            }

            // Comments
            '/' => {
                if self.match_char('/') {
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                    Step::Skip
                } else {
                    Step::Token(TokenType::Slash, None)
                }
            }

            '"' => self.scan_string(),

            c => {
                if let Some(token_type) = TokenType::from_punctuation(c) {
                    Step::Token(token_type, None)
                } else if let Some((single, double)) = TokenType::from_operator(c) {
                    let token_type = if self.match_char('=') { double } else { single };
                    Step::Token(token_type, None)
                } else {
                    Step::Error {
                        kind: LexicalError::UnexpectedCharacter(c),
                        offset: self.start,
                    }
                }
            }
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn scan_string(&mut self) -> Step {
        while self.peek() != Some('"') && !self.is_at_end() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Step::Error {
                kind: LexicalError::UnterminatedString,
                offset: self.current,
            };
        }

        // Closing quote
        self.advance();

        let body: String = self.source[self.start + 1..self.current - 1].iter().collect();
        Step::Token(TokenType::String, Some(Literal::String(body)))
    }

    /// Add a token spanning `start..current`
    fn add_token(&mut self, token_type: TokenType, literal: Option<Literal>) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        trace!(line = self.start_line, %token_type, %lexeme, "token");
        self.tokens
            .push(Token::new(token_type, lexeme, literal, self.start_line));
    }

    fn add_error(&mut self, kind: LexicalError, offset: usize) {
        let error = ScanError::new(kind, self.line, offset);
        debug!(line = error.line, offset, "{}", error.message());
        self.errors.push(error);
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
