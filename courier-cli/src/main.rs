//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use courier_cli::CliError;

#[expect(clippy::print_stderr, reason = "top-level error report")]
fn main() -> ExitCode {
    match courier_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            ExitCode::FAILURE
        }
    }
}
