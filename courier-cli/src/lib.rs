//! Command-line interface for the Courier engine.
//!
//! `courier solve <path>` reads a JSON-encoded
//! [`SolveRequest`](courier_core::SolveRequest), runs the breadth-first
//! solver and prints the [`SolveResponse`](courier_core::SolveResponse) as
//! JSON. Options layer in the usual order: CLI flags over `COURIER_*`
//! environment variables over configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod solve;

pub use error::CliError;

use solve::{SolveArgs, run_solve};

const ARG_SOLVE_REQUEST: &str = "request-path";
const ARG_SOLVE_COVERAGE_RADIUS: &str = "coverage-radius";
const ARG_SOLVE_MAX_PACKAGES: &str = "max-packages";
const ARG_SOLVE_SEQUENTIAL: &str = "sequential";
const ARG_SOLVE_ALLOW_UNREACHABLE: &str = "allow-unreachable";
const ENV_SOLVE_REQUEST: &str = "COURIER_CMDS_SOLVE_REQUEST_PATH";

/// Run the Courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments, configuration, the request file or
/// the solve itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Plan the shortest closed walk that collects every package",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a JSON request and print the walk.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
