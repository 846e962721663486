//! Token definitions for the Lox language
//!
//! This module defines all token types produced by the scanner, together with
//! the read-only tables that map source characters to token types.

use std::fmt;

/// A token in the Lox language
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    /// Exact source text consumed for this token (empty for EOF)
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// Line on which the lexeme starts (1-based)
    pub line: usize,
}

impl Token {
    /// Create a new token
    pub fn new(
        token_type: TokenType,
        lexeme: String,
        literal: Option<Literal>,
        line: usize,
    ) -> Self {
        Self {
            token_type,
            lexeme,
            literal,
            line,
        }
    }

    /// Create the end-of-input token
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::Eof, String::new(), None, line)
    }
}

/// Renders as `TYPE lexeme literal`, with `null` standing in for a missing literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.token_type, self.lexeme, literal),
            None => write!(f, "{} {} null", self.token_type, self.lexeme),
        }
    }
}

/// Token types in the Lox language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Star,       // *
    Dot,        // .
    Comma,      // ,
    Plus,       // +
    Minus,      // -
    Semicolon,  // ;
    Slash,      // /

    // One or two character tokens
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Literals
    String,
    /// Reserved; the scanner does not recognise number literals yet.
    Number,

    Eof,
}

/// Characters that always form a token on their own.
pub const PUNCTUATION: &[(char, TokenType)] = &[
    ('(', TokenType::LeftParen),
    (')', TokenType::RightParen),
    ('{', TokenType::LeftBrace),
    ('}', TokenType::RightBrace),
    ('*', TokenType::Star),
    ('.', TokenType::Dot),
    (',', TokenType::Comma),
    ('+', TokenType::Plus),
    ('-', TokenType::Minus),
    (';', TokenType::Semicolon),
];

/// Operators that become a two-character token when followed by `=`.
///
/// Each entry is `(first char, one-char type, two-char type)`.
pub const OPERATORS: &[(char, TokenType, TokenType)] = &[
    ('!', TokenType::Bang, TokenType::BangEqual),
    ('=', TokenType::Equal, TokenType::EqualEqual),
    ('<', TokenType::Less, TokenType::LessEqual),
    ('>', TokenType::Greater, TokenType::GreaterEqual),
];

impl TokenType {
    /// Look up a single-character punctuation token
    pub fn from_punctuation(c: char) -> Option<Self> {
        PUNCTUATION
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, token_type)| *token_type)
    }

    /// Look up an operator that may take a trailing `=`
    ///
    /// Returns the one-character and two-character variants.
    pub fn from_operator(c: char) -> Option<(Self, Self)> {
        OPERATORS
            .iter()
            .find(|(ch, _, _)| *ch == c)
            .map(|(_, single, double)| (*single, *double))
    }

    /// Canonical upper-snake-case name, as printed by `tokenize`
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Star => "STAR",
            Self::Dot => "DOT",
            Self::Comma => "COMMA",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal token values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
        }
    }
}
