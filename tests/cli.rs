use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn lox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lox binary")
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    file
}

fn tokenize(contents: &str) -> Output {
    let file = source_file(contents);
    lox(&["tokenize", file.path().to_str().unwrap()])
}

#[test]
fn tokenize_clean_file_exits_zero() {
    let output = tokenize("{ != }\n// done\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "LEFT_BRACE { null\nBANG_EQUAL != null\nRIGHT_BRACE } null\nEOF  null\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn tokenize_empty_file() {
    let output = tokenize("");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "EOF  null\n");
}

#[test]
fn lexical_errors_exit_65() {
    let output = tokenize("(@)\n\"abc");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[line 1] Error: Unexpected character: @\n[line 2] Error: Unterminated string.\n"
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "LEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n"
    );
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lox");
    let output = lox(&["tokenize", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn usage_errors_exit_one() {
    assert_eq!(lox(&[]).status.code(), Some(1));
    assert_eq!(lox(&["tokenize"]).status.code(), Some(1));

    let output = lox(&["evaluate", "test.lox"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command: evaluate"));
    assert!(stderr.contains("Usage: lox tokenize"));
}

#[test]
fn help_exits_zero() {
    let output = lox(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE:"));
}
