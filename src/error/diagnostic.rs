//! Diagnostic formatting for better error messages
//!
//! This module renders scan errors with source code context and a caret
//! under the offending position.

use super::ScanError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a ScanError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a ScanError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a ScanError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}: ", "error".red().bold()));
        output.push_str(&self.error.message());
        output.push('\n');

        if let Some(source) = self.source {
            let column = column_of(source, self.error.offset);
            output.push_str(&format!(
                "  {} line {}, column {}\n",
                "-->".blue().bold(),
                self.error.line,
                column
            ));
            output.push_str(&self.format_source_context(source, column));
        } else {
            output.push_str(&format!("  {} line {}\n", "-->".blue().bold(), self.error.line));
        }

        output
    }

    /// Format source code context around the error line
    fn format_source_context(&self, source: &str, column: usize) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();
        let line = self.error.line;

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let line_num_width = line.to_string().len();

        // Show previous line if available
        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding = " ".repeat(line_num_width + 3 + column - 1);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// 1-based column of a character offset
fn column_of(source: &str, offset: usize) -> usize {
    let before: Vec<char> = source.chars().take(offset).collect();
    let line_start = before
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |idx| idx + 1);
    before.len() - line_start + 1
}
