//! Render command: show how inline markup is displayed.

use anyhow::Result;
use supdash_core::render;

use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// Execute the render command. Malformed markup prints as literal text.
pub fn execute(input: &str, format: OutputFormat) -> Result<()> {
    let fragments = render(input);

    match format {
        OutputFormat::Json => print_json(&fragments)?,
        OutputFormat::Jsonl => print_jsonl(&fragments)?,
        OutputFormat::Text => println!("{}", text::markup(&fragments)),
    }
    Ok(())
}
