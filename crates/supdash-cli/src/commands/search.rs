//! Search command implementation

use anyhow::{Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use supdash_core::search::terms;
use supdash_core::{Config, SearchEntry, SearchIndex, SearchOptions, Span, highlight};
use tracing::debug;

use crate::error::CliError;
use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// One result with its title split into highlight spans.
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub entry: &'a SearchEntry,
    pub highlight: Vec<Span>,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    limit: usize,
    results: &'a [SearchHit<'a>],
}

/// Effective options: config values, then command-line overrides.
pub fn options(config: &Config, limit: Option<usize>, include_home: bool) -> Result<SearchOptions> {
    let mut options = SearchOptions::from(&config.search);
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(CliError::usage(anyhow!("Invalid value for --limit: must be at least 1")).into());
        }
        options.limit = limit;
    }
    if include_home {
        options.include_home = true;
    }
    Ok(options)
}

/// Run `query` against `index`. Queries below the minimum length are rejected.
pub fn run<'a>(
    index: &'a SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchHit<'a>>> {
    if query.trim().chars().count() < options.min_query_chars {
        return Err(CliError::invalid_query(anyhow!(
            "Query must have at least {} characters",
            options.min_query_chars
        ))
        .into());
    }

    let terms = terms(query);
    let hits: Vec<SearchHit<'a>> = index
        .query(query, options)
        .into_iter()
        .map(|entry| SearchHit {
            highlight: highlight(&entry.title, &terms),
            entry,
        })
        .collect();
    debug!("{} results for '{query}'", hits.len());
    Ok(hits)
}

/// Execute the search command.
pub fn execute(
    query: &[String],
    limit: Option<usize>,
    include_home: bool,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let query = query.join(" ");
    let options = options(config, limit, include_home)?;
    let hits = run(SearchIndex::builtin(), &query, &options)?;

    match format {
        OutputFormat::Json => print_json(&SearchOutput {
            query: &query,
            limit: options.limit,
            results: &hits,
        })?,
        OutputFormat::Jsonl => print_jsonl(&hits)?,
        OutputFormat::Text => print_text(&query, &hits),
    }
    Ok(())
}

fn print_text(query: &str, hits: &[SearchHit<'_>]) {
    if hits.is_empty() {
        println!("No results found for '{query}'");
        return;
    }

    for (idx, hit) in hits.iter().enumerate() {
        println!(
            "{:>2}. {}  {}",
            idx + 1,
            text::spans(&hit.highlight),
            hit.entry.path.dimmed()
        );
        if let Some(info) = &hit.entry.info {
            println!("    {info}");
        }
    }
}
