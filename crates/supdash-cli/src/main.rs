//! supdash CLI - support documentation dashboard in the terminal
//!
//! Entry point for the `supdash` binary. Errors are printed to stderr and
//! mapped to semantic exit codes (see [`supdash_cli::error`]).

use std::process::ExitCode;

use supdash_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match supdash_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
