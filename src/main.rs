//! Campus - BFS and Dijkstra routes over a campus map
//!
//! Lists campus locations, finds routes between them, and compares
//! fewest-hop against lowest-cost routing.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use campus_core::error::CampusError;
use campus_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, cli.format == Some(OutputFormat::Json), cli.quiet);
            exit_with(&e)
        }
    }
}

/// clap owns help, version and plain-text errors; a JSON request gets the envelope
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !json_requested(std::env::args().skip(1)) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => CampusError::UsageError(err.to_string()),
        _ => CampusError::Other(err.to_string()),
    };
    report(&error, true, false);
    exit_with(&error)
}

fn report(error: &CampusError, json: bool, quiet: bool) {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
}

fn exit_with(error: &CampusError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// Whether argv asks for `--format json`, read before clap has succeeded
fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
