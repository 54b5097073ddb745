//! Zipex CLI - validated zip extraction into a destination directory.

mod cli;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

/// Exit code for an input that fails the zip format check.
///
/// Distinguished from generic failures (1) so callers can tell "not a
/// valid archive" apart from fatal I/O conditions.
const INVALID_ARCHIVE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match zipex_core::extract_zip(&cli.archive, &cli.destination) {
        Ok(report) => {
            if let Err(e) = formatter.format_extraction_result(&report) {
                formatter.format_error(&e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let invalid = err.is_invalid_format();
            formatter.format_error(&error::convert_extract_error(err, &cli.archive));
            if invalid {
                ExitCode::from(INVALID_ARCHIVE_EXIT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
