//! # Cardwar CLI Library
//!
//! Command-line front end for the cardwar engine: two seats, a shuffled deck
//! split in half, and rounds where the higher card scores a point.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardwar", "play", "--mode", "human-auto"];
//! let code = cardwar_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game (computer vs computer, human vs computer, human vs human)
//! - `sim`: Play many computer games instantly and tally the outcomes
//! - `deal`: Shuffle and print both players' halves
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod scheduler;
pub mod ui;
pub mod validation;

use cli::{CardwarCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use cli::ModeArg;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardwar", "deal", "--seed", "42"];
/// let code = cardwar_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardwarCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            mode,
            seed,
            interval_ms,
            json,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                mode.map(Into::into),
                seed,
                interval_ms,
                json,
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim { games, seed } => handle_sim_command(games, seed, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    report(result, err)
}

/// Maps a command result to the process exit code.
fn report(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        // already reported by the handler
        Err(CliError::Config(_)) | Err(CliError::InvalidInput(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Cardwar CLI");
    write_or_exit!(err, "Usage: cardwar <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: cardwar --help");
    exit_code::ERROR
}
