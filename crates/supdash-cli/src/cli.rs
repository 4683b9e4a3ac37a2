//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `supdash`, a terminal
//! front end over the support-documentation dashboard. The CLI is built using
//! `clap` with derive macros for help generation and argument validation.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Search the dashboard
//! supdash search tier 1
//!
//! # Show a page and its override view
//! supdash show /teams/tier-1/tyler
//!
//! # Simulate a menu click
//! supdash open /teams/tier-2/beta-agents
//!
//! # Render markup
//! supdash render "~bbold~b and ~iitalic~i"
//! ```
//!
//! ## Output Formats
//!
//! Every command that prints data accepts `-f/--format`:
//!
//! - **text**: Human-readable output with ANSI styling
//! - **json**: A single JSON document
//! - **jsonl**: One JSON object per line

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `supdash` command
#[derive(Parser, Clone, Debug)]
#[command(name = "supdash")]
#[command(version)]
#[command(about = "supdash - Support documentation dashboard in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a configuration file
    #[arg(long, global = true, env = "SUPDASH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Search modules, sections and subsections
    ///
    /// Every whitespace-separated term must appear in an entry's title,
    /// info or notes (case-insensitive).
    Search {
        /// Search terms
        #[arg(value_name = "QUERY", required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results (defaults to `search.limit`)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Include the Home placeholder in results
        #[arg(long)]
        include_home: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Show the page for a route, with its override view if one exists
    Show {
        /// Route path such as `/teams/tier-1` (defaults to `/`)
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Simulate a menu click and report whether it opens a modal, navigates, or both
    Open {
        /// Route path of the clicked entry
        #[arg(value_name = "PATH")]
        path: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print the navigation menu
    Menu {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Render inline markup (`~i`, `~b`, `~u`, `~n`)
    Render {
        /// Text to render
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print a spreadsheet asset as a table
    Sheet {
        /// Asset name (resolved under `paths.assets`) or a path to a workbook
        #[arg(value_name = "NAME|FILE")]
        name: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// The output format argument, for commands that print data.
    pub const fn format(&self) -> Option<&FormatArg> {
        match self {
            Self::Search { format, .. }
            | Self::Show { format, .. }
            | Self::Open { format, .. }
            | Self::Menu { format }
            | Self::Render { format, .. }
            | Self::Sheet { format, .. } => Some(format),
            Self::Completions { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_collects_terms() {
        let cli = Cli::try_parse_from(["supdash", "search", "tier", "1", "--limit", "3"]).unwrap();
        match cli.command {
            Some(Commands::Search { query, limit, include_home, .. }) => {
                assert_eq!(query, vec!["tier", "1"]);
                assert_eq!(limit, Some(3));
                assert!(!include_home);
            },
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_a_query() {
        assert!(Cli::try_parse_from(["supdash", "search"]).is_err());
    }

    #[test]
    fn test_show_defaults_to_root() {
        let cli = Cli::try_parse_from(["supdash", "show"]).unwrap();
        match cli.command {
            Some(Commands::Show { path, .. }) => assert_eq!(path, "/"),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["supdash", "menu", "--no-color", "-q"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["supdash", "-q", "-v", "menu"]).is_err());
    }

    #[test]
    fn test_completions_has_no_format() {
        let cli = Cli::try_parse_from(["supdash", "completions", "bash"]).unwrap();
        assert!(cli.command.unwrap().format().is_none());
    }
}
