//! # Utility Functions and Helpers
//!
//! Shared pieces used across CLI commands.
//!
//! - [`cli_args`]: the shared `--format` argument
//! - [`logging`]: tracing subscriber and color control

pub mod cli_args;
pub mod logging;

#[cfg(test)]
pub mod test_support;

pub use logging::initialize_logging;
