//! Open command: simulate a menu click.

use anyhow::{Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use supdash_core::nav::ModalContent;
use supdash_core::{ContentTree, NavAction, NavState, RoutePath, Selection};

use crate::error::CliError;
use crate::output::{OutputFormat, print_json, print_jsonl, text};

/// Result of clicking one menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenReport {
    pub path: String,
    pub modal: bool,
    pub navigate: bool,
    /// Location after the click; unchanged when only a modal opens.
    pub location: String,
    pub selection: Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ModalContent>,
}

/// Click the entry at `path`, starting from the home page.
pub fn click(tree: &ContentTree, path: &str) -> Result<OpenReport> {
    let route = RoutePath::parse(path).map_err(CliError::from)?;
    let state = NavState::new(tree).reduce(NavAction::Activate(route.to_string()));

    let Some(outcome) = state.last_click else {
        return Err(CliError::not_found(anyhow!("No menu entry at {route}")).into());
    };

    Ok(OpenReport {
        path: route.to_string(),
        modal: outcome.modal,
        navigate: outcome.navigate,
        location: state.location,
        selection: state.selection,
        content: state.modal,
    })
}

/// Execute the open command.
pub fn execute(path: &str, format: OutputFormat) -> Result<()> {
    let report = click(ContentTree::builtin(), path)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Jsonl => print_jsonl([&report])?,
        OutputFormat::Text => {
            if let Some(content) = &report.content {
                println!("{}", text::modal(content));
                println!();
            }
            if report.navigate {
                println!("{} {}", "Navigates to".green(), report.location);
            } else {
                println!("{} {}", "Stays on".yellow(), report.location);
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::exit_code_from_error;
    use supdash_core::{ContentNode, Fragment};

    fn tree() -> ContentTree {
        ContentTree::new(vec![
            ContentNode::module("Home"),
            ContentNode::module("Teams").with_children(vec![
                ContentNode::section("Plain"),
                ContentNode::section("Modal Only")
                    .with_info("Read first")
                    .with_modal(true, false),
                ContentNode::section("Both")
                    .with_info("Read, then go")
                    .with_modal(true, true),
            ]),
        ])
    }

    #[test]
    fn test_plain_entry_navigates() {
        let report = click(&tree(), "/teams/plain").unwrap();
        assert!(!report.modal);
        assert!(report.navigate);
        assert_eq!(report.location, "/teams/plain");
        assert!(report.content.is_none());
    }

    #[test]
    fn test_modal_only_entry_stays() {
        let report = click(&tree(), "/teams/modal-only").unwrap();
        assert!(report.modal);
        assert!(!report.navigate);
        assert_eq!(report.location, "/");
        assert_eq!(
            report.content.unwrap().info,
            vec![Fragment::Text("Read first".into())]
        );
    }

    #[test]
    fn test_modal_and_mult_entry_does_both() {
        let report = click(&tree(), "/teams/both").unwrap();
        assert!(report.modal);
        assert!(report.navigate);
        assert_eq!(report.location, "/teams/both");
    }

    #[test]
    fn test_unknown_entry_is_not_found() {
        let err = click(&tree(), "/teams/missing").unwrap_err();
        assert_eq!(exit_code_from_error(&err), 3);
    }

    #[test]
    fn test_builtin_beta_agents_opens_modal_and_navigates() {
        let report = click(ContentTree::builtin(), "/teams/tier-2/beta-agents").unwrap();
        assert!(report.modal && report.navigate);
        assert_eq!(report.selection.label(), "Teams > Tier 2 > Beta Agents");
    }
}
