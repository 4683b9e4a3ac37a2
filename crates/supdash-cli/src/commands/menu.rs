//! Menu command: print the navigation bar.

use anyhow::Result;
use supdash_core::{ContentTree, Menu};

use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// Execute the menu command. JSONL prints one module per line.
pub fn execute(format: OutputFormat) -> Result<()> {
    let menu = Menu::from_tree(ContentTree::builtin());

    match format {
        OutputFormat::Json => print_json(&menu)?,
        OutputFormat::Jsonl => print_jsonl(&menu.modules)?,
        OutputFormat::Text => println!("{}", text::menu(&menu)),
    }
    Ok(())
}
