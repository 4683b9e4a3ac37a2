#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn home_dir() -> &'static Path {
    static HOME_DIR: OnceLock<TempDir> = OnceLock::new();
    HOME_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "").expect("failed to write config");
            std::fs::create_dir_all(dir.path().join("assets")).expect("failed to create assets");
            dir
        })
        .path()
}

/// Create a configured `supdash` command with an empty config file and an
/// empty assets directory.
#[allow(dead_code)]
pub fn supdash_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("supdash"));
    cmd.timeout(CMD_TIMEOUT);
    let dir = home_dir();
    cmd.env("SUPDASH_CONFIG", dir.join("config.toml"));
    cmd.env("SUPDASH_ASSETS_DIR", dir.join("assets"));
    cmd.env_remove("SUPDASH_SEARCH_LIMIT");
    cmd.env_remove("SUPDASH_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run `args` with `--format json` and parse stdout.
#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let stdout = supdash_cmd()
        .args(args)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&stdout).expect("stdout should be JSON")
}
