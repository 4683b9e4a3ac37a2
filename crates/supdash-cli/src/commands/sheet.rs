//! Sheet command: print a spreadsheet asset.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};
use supdash_core::sheet::{asset_path, load_sheet};
use supdash_core::{Config, SheetTable};

use crate::error::{CliError, ErrorCategory, IntoCliError};
use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// An existing file path is used as is; anything else names an asset under
/// `paths.assets`.
pub fn locate(name: &str, config: &Config) -> PathBuf {
    let direct = Path::new(name);
    if direct.is_file() {
        direct.to_path_buf()
    } else {
        asset_path(&config.paths.assets, name)
    }
}

/// Rows keyed by header. Cells beyond the header row use their column
/// number as the key.
pub fn records(table: &SheetTable) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(idx, cell)| {
                    let key = table
                        .headers
                        .get(idx)
                        .filter(|header| !header.is_empty())
                        .cloned()
                        .unwrap_or_else(|| (idx + 1).to_string());
                    (key, Value::String(cell.clone()))
                })
                .collect()
        })
        .collect()
}

/// Execute the sheet command.
pub async fn execute(name: &str, config: &Config, format: OutputFormat) -> Result<()> {
    let path = locate(name, config);
    if !path.is_file() {
        return Err(CliError::not_found(anyhow!("No spreadsheet at {}", path.display())).into());
    }

    let table = load_sheet(&path, &config.display.date_format)
        .await
        .map_err(|e| e.with_category(ErrorCategory::Load))?;

    match format {
        OutputFormat::Json => print_json(&table)?,
        OutputFormat::Jsonl => print_jsonl(records(&table))?,
        OutputFormat::Text => println!("{}", text::table(&table)),
    }
    Ok(())
}
