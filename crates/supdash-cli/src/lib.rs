//! supdash CLI - support documentation dashboard in the terminal
//!
//! This is the library behind the `supdash` binary. Command implementations
//! live in separate modules; [`run`] parses arguments, sets up logging,
//! loads configuration and dispatches.
use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::Path;
use supdash_core::Config;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::error::CliError;
use crate::utils::initialize_logging;
use cli::{Cli, Commands};

/// Execute the supdash CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if logging, configuration or the command itself fails.
/// The error's category decides the process exit code.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let config_path = cli.config.as_deref();

    match command {
        Commands::Search {
            query,
            limit,
            include_home,
            format,
        } => {
            let config = load_config(config_path)?;
            commands::search::execute(&query, limit, include_home, &config, format.resolve())
        },
        Commands::Show { path, format } => {
            let config = load_config(config_path)?;
            commands::show::execute(&path, &config, format.resolve()).await
        },
        Commands::Open { path, format } => commands::open::execute(&path, format.resolve()),
        Commands::Menu { format } => commands::menu::execute(format.resolve()),
        Commands::Render { text, format } => commands::render::execute(&text, format.resolve()),
        Commands::Sheet { name, format } => {
            let config = load_config(config_path)?;
            commands::sheet::execute(&name, &config, format.resolve()).await
        },
        Commands::Completions { shell } => {
            commands::completions::generate(shell, &mut std::io::stdout());
            Ok(())
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load_with(path).map_err(CliError::from)?;
    debug!("Using assets from {}", config.paths.assets.display());
    Ok(config)
}
