//! Show command: resolve a route and print the page with its override view.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use supdash_core::{Config, ContentPanel, ContentTree, Displayed, EmbeddedViews, Navigator};

use crate::error::CliError;
use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// Navigate to `path` and return what ends up on screen.
pub async fn display(path: &str, config: &Config) -> Result<Displayed> {
    let navigator = Navigator::new(
        Arc::new(ContentTree::builtin().clone()),
        Arc::new(EmbeddedViews::default()),
        config,
    );

    navigator.navigate(path).await.map_err(CliError::from)?;
    navigator
        .displayed()
        .await
        .ok_or_else(|| anyhow!("Nothing displayed for {path}"))
}

/// Execute the show command.
///
/// A path that matches no content still prints in machine formats, then
/// exits with the not-found code.
pub async fn execute(path: &str, config: &Config, format: OutputFormat) -> Result<()> {
    let displayed = display(path, config).await?;

    match format {
        OutputFormat::Json => print_json(&displayed)?,
        OutputFormat::Jsonl => print_jsonl([&displayed])?,
        OutputFormat::Text => {
            if let Some(page) = displayed.resolution.content.page() {
                println!("{}", text::page(page));
            }
            if let Some(view) = &displayed.view {
                println!();
                println!("{}", text::view(view));
            }
        },
    }

    if let ContentPanel::NotFound(miss) = &displayed.resolution.content {
        return Err(CliError::not_found(miss.clone()).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::exit_code_from_error;

    fn config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.assets = dir.path().to_path_buf();
        (dir, config)
    }

    #[tokio::test]
    async fn test_display_includes_override() {
        let (_dir, config) = config();
        let shown = display("/teams/operations/dom", &config).await.unwrap();

        assert!(shown.resolution.content.page().is_some());
        assert_eq!(shown.view.unwrap().view.title, "Team Info");
    }

    #[tokio::test]
    async fn test_missing_page_exits_not_found() {
        let (_dir, config) = config();
        let err = execute("/teams/tier-9", &config, OutputFormat::Json)
            .await
            .unwrap_err();
        assert_eq!(exit_code_from_error(&err), 3);
        assert_eq!(err.to_string(), "no section matching 'tier-9'");
    }

    #[tokio::test]
    async fn test_deep_path_is_usage_error() {
        let (_dir, config) = config();
        let err = display("/a/b/c/d", &config).await.unwrap_err();
        assert_eq!(exit_code_from_error(&err), 2);
    }
}
