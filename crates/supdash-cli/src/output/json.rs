//! JSON output formatting

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Print each item as one compact JSON line.
pub fn print_jsonl<T: Serialize>(items: impl IntoIterator<Item = T>) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(&item)?);
    }
    Ok(())
}
