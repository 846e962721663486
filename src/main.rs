//! Lox CLI
//!
//! Command-line interface for the Lox scanner.

use std::env;
use std::process;

use lox_lang::cli::{self, EXIT_FAILURE};
use lox_lang::{logging, CliError};

fn main() {
    logging::init_tracing();

    let code = match cli::parse_args(env::args().skip(1)).and_then(cli::run) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            if matches!(
                e,
                CliError::UnknownCommand(_) | CliError::UnknownFlag(_) | CliError::UnexpectedArgument(_)
            ) {
                cli::print_usage();
            }
            EXIT_FAILURE
        }
    };

    process::exit(code);
}
