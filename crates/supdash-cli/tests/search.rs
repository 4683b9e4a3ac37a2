#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{run_json, supdash_cmd};
use predicates::prelude::*;

#[test]
fn search_is_conjunctive_and_ranked() {
    let json = run_json(&["search", "tier", "1"]);

    assert_eq!(json["query"], "tier 1");
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["path"], "/teams/tier-1");
    assert_eq!(results[0]["kind"], "section");
    for result in results {
        assert!(result["highlight"].is_array());
    }
}

#[test]
fn search_caps_results_at_limit() {
    let json = run_json(&["search", "teams"]);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["results"].as_array().unwrap().len(), 10);

    let json = run_json(&["search", "teams", "--limit", "3"]);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
}

#[test]
fn search_limit_from_environment() {
    let stdout = supdash_cmd()
        .env("SUPDASH_SEARCH_LIMIT", "2")
        .args(["search", "teams", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn home_is_hidden_unless_requested() {
    let json = run_json(&["search", "home"]);
    assert!(json["results"].as_array().unwrap().is_empty());

    let json = run_json(&["search", "home", "--include-home"]);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["path"], "/");
}

#[test]
fn jsonl_prints_one_result_per_line() {
    supdash_cmd()
        .args(["search", "tyler", "-f", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\":\"/teams/tier-1/tyler\""))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn text_output_lists_paths() {
    supdash_cmd()
        .args(["search", "operations", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. Teams > Operations  /teams/operations"));
}

#[test]
fn text_output_reports_no_results() {
    supdash_cmd()
        .args(["search", "zebra", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'zebra'"));
}

#[test]
fn short_query_exits_with_invalid_query() {
    supdash_cmd()
        .args(["search", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("at least 2 characters"));
}
