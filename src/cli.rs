//! Command-line driver
//!
//! Turns arguments into a [`Command`] and runs it. The scanner itself never
//! fails; everything that can go wrong here is a [`CliError`].

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{CliError, CliResult, Diagnostic};
use crate::lexer::scan_tokens;
use crate::VERSION;

/// Exit status when the source scanned cleanly
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when at least one lexical error was found (`EX_DATAERR`)
pub const EXIT_LEXICAL_ERROR: i32 = 65;
/// Exit status for usage and I/O failures
pub const EXIT_FAILURE: i32 = 1;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tokenize { path: PathBuf, pretty: bool },
    Help,
    Version,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I, S>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);

    let command = args.next().ok_or(CliError::MissingArguments)?;
    match command.as_str() {
        "--help" | "-h" => return Ok(Command::Help),
        "--version" | "-V" => return Ok(Command::Version),
        "tokenize" => {}
        _ if command.starts_with('-') => return Err(CliError::UnknownFlag(command)),
        _ => return Err(CliError::UnknownCommand(command)),
    }

    let mut pretty = false;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--pretty" | "-p" => pretty = true,
            _ if arg.starts_with('-') => return Err(CliError::UnknownFlag(arg)),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(CliError::UnexpectedArgument(arg)),
        }
    }

    let path = path.ok_or(CliError::MissingArguments)?;
    Ok(Command::Tokenize { path, pretty })
}

/// Run a command, returning the process exit status
pub fn run(command: Command) -> CliResult<i32> {
    debug!(?command, "running command");

    match command {
        Command::Help => {
            print_help();
            Ok(EXIT_SUCCESS)
        }
        Command::Version => {
            println!("lox {}", VERSION);
            Ok(EXIT_SUCCESS)
        }
        Command::Tokenize { path, pretty } => {
            let source = fs::read_to_string(&path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = source.len(), "read source file");

            let stdout = io::stdout();
            let stderr = io::stderr();
            tokenize(&source, pretty, &mut stdout.lock(), &mut stderr.lock())
        }
    }
}

/// Scan `source`, writing tokens to `out` and lexical errors to `err`
///
/// Errors are written first, in source order. Returns
/// [`EXIT_LEXICAL_ERROR`] if any were found.
pub fn tokenize<W, E>(source: &str, pretty: bool, out: &mut W, err: &mut E) -> CliResult<i32>
where
    W: Write,
    E: Write,
{
    let output = scan_tokens(source);

    for error in &output.errors {
        if pretty {
            write!(err, "{}", Diagnostic::with_source(error, source))?;
        } else {
            writeln!(err, "{}", error)?;
        }
    }

    for token in &output.tokens {
        writeln!(out, "{}", token)?;
    }

    out.flush()?;
    err.flush()?;

    if output.has_errors() {
        Ok(EXIT_LEXICAL_ERROR)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

pub fn print_usage() {
    eprintln!("Usage: lox tokenize <filename> [--pretty]");
    eprintln!("       lox --help");
}

fn print_help() {
    println!("Lox v{} - lexical analysis front end", VERSION);
    println!();
    println!("USAGE:");
    println!("    lox tokenize <filename> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -p, --pretty     Show lexical errors with source context");
    println!("    -h, --help       Show this help message");
    println!("    -V, --version    Show version");
    println!();
    println!("EXIT STATUS:");
    println!("    0     no lexical errors");
    println!("    65    at least one lexical error");
    println!("    1     usage or I/O failure");
    println!();
    println!("Set RUST_LOG=lox_lang=trace to log scanner activity to stderr.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_tokenize(source: &str, pretty: bool) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = tokenize(source, pretty, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_parse_tokenize() {
        assert_eq!(
            parse_args(["tokenize", "test.lox"]).unwrap(),
            Command::Tokenize {
                path: PathBuf::from("test.lox"),
                pretty: false
            }
        );
        assert_eq!(
            parse_args(["tokenize", "--pretty", "test.lox"]).unwrap(),
            Command::Tokenize {
                path: PathBuf::from("test.lox"),
                pretty: true
            }
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(["--help"]).unwrap(), Command::Help);
        assert_eq!(parse_args(["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_failures() {
        let empty: [&str; 0] = [];
        assert!(matches!(parse_args(empty), Err(CliError::MissingArguments)));
        assert!(matches!(
            parse_args(["tokenize"]),
            Err(CliError::MissingArguments)
        ));
        assert!(matches!(
            parse_args(["parse", "test.lox"]),
            Err(CliError::UnknownCommand(c)) if c == "parse"
        ));
        assert!(matches!(
            parse_args(["tokenize", "--fast", "test.lox"]),
            Err(CliError::UnknownFlag(f)) if f == "--fast"
        ));
        assert!(matches!(
            parse_args(["tokenize", "a.lox", "b.lox"]),
            Err(CliError::UnexpectedArgument(a)) if a == "b.lox"
        ));
    }

    #[test]
    fn test_tokenize_clean_source() {
        let (code, out, err) = run_tokenize("(\"hi\")", false);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            out,
            "LEFT_PAREN ( null\nSTRING \"hi\" hi\nRIGHT_PAREN ) null\nEOF  null\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn test_tokenize_empty_source() {
        let (code, out, err) = run_tokenize("", false);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "EOF  null\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_tokenize_with_errors() {
        let (code, out, err) = run_tokenize(",.$(#\n\"open", false);
        assert_eq!(code, EXIT_LEXICAL_ERROR);
        assert_eq!(
            err,
            "[line 1] Error: Unexpected character: $\n\
             [line 1] Error: Unexpected character: #\n\
             [line 2] Error: Unterminated string.\n"
        );
        assert_eq!(
            out,
            "COMMA , null\nDOT . null\nLEFT_PAREN ( null\nEOF  null\n"
        );
    }

    #[test]
    fn test_tokenize_pretty_errors() {
        colored::control::set_override(false);
        let (code, _, err) = run_tokenize("+\n( @ )", true);
        assert_eq!(code, EXIT_LEXICAL_ERROR);
        assert!(err.contains("Unexpected character: @"));
        assert!(err.contains("line 2, column 3"));
        assert!(err.contains("( @ )"));
    }
}
