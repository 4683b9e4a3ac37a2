//! # Output Formatting
//!
//! Every command builds a serializable value and hands it to this module,
//! which prints it in the requested format.
//!
//! ## Supported Formats
//!
//! - **Text**: Human-readable output with ANSI styling for markup and matches
//! - **JSON**: A single pretty-printed JSON document
//! - **JSONL**: Newline-delimited JSON, one record per line
//!
//! ```bash
//! supdash search tier -f json | jq '.results[].path'
//! supdash menu -f jsonl | jq -r .label
//! ```

mod json;
pub mod text;

pub use json::{print_json, print_jsonl};

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output
    Text,
    /// Single JSON document
    Json,
    /// Newline-delimited JSON
    Jsonl,
}

impl OutputFormat {
    /// Whether this format is meant for programs rather than people.
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}
