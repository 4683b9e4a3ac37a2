//! The embedded documentation tree.
//!
//! Content is authored here as data and built once per process. Nothing
//! mutates it afterwards, so a single shared instance is handed out by
//! [`ContentTree::builtin`].

use once_cell::sync::Lazy;

use crate::types::ContentNode;

/// Title of the root placeholder module served at `/`.
pub const HOME_TITLE: &str = "Home";

// Info text for entries that have not been written up yet.
const PLACEHOLDER_INFO: &str = "info requirements text (supports markup tags)";

static BUILTIN: Lazy<ContentTree> = Lazy::new(ContentTree::dashboard);

/// Ordered modules, each holding ordered sections and subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTree {
    modules: Vec<ContentNode>,
}

impl ContentTree {
    pub const fn new(modules: Vec<ContentNode>) -> Self {
        Self { modules }
    }

    /// The dashboard content compiled into the binary.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn modules(&self) -> &[ContentNode] {
        &self.modules
    }

    /// The root placeholder module, if the tree has one.
    pub fn home(&self) -> Option<&ContentNode> {
        self.modules.iter().find(|module| is_home(module))
    }

    fn dashboard() -> Self {
        let tier_one = ContentNode::section("Tier 1").with_children(vec![
            ContentNode::subsection("Tyler").with_info("Tyler's team of Tier 1 agents"),
            ContentNode::subsection("Israel").with_info("Israel's team of Tier 1 agents"),
            ContentNode::subsection("Porter").with_info("Porter's team of Tier 1 chat agents"),
            ContentNode::subsection("Walker")
                .with_info("Walker's team of Tier 1 agents")
                .with_modal(false, true),
        ]);

        let tier_two = ContentNode::section("Tier 2").with_children(vec![
            ContentNode::subsection("Leads").with_info(PLACEHOLDER_INFO),
            ContentNode::subsection("Saturdays").with_info(PLACEHOLDER_INFO),
            ContentNode::subsection("Full-Time Agents").with_info(PLACEHOLDER_INFO),
            ContentNode::subsection("Beta Agents")
                .with_info(
                    "Beta Tier 2 agents. Monitor their performance to help them grow and improve.",
                )
                .with_modal(true, true),
            ContentNode::subsection("White Glove").with_info(PLACEHOLDER_INFO),
        ]);

        let operations = ContentNode::section("Operations")
            .with_notes("Ops team")
            .with_children(vec![
                ContentNode::subsection("Dom").with_info("This is the info for Dom."),
                ContentNode::subsection("Spencer"),
                ContentNode::subsection("Fig"),
                ContentNode::subsection("Jon").with_modal(false, true),
            ]);

        let modules = vec![
            ContentNode::module(HOME_TITLE)
                .with_info("~uNone~u")
                .with_notes("Notes about the site and how it can be used."),
            ContentNode::module("Teams").with_children(vec![tier_one, tier_two, operations]),
        ];

        Self::new(modules)
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Whether `node` is the root placeholder module.
pub fn is_home(node: &ContentNode) -> bool {
    node.kind == crate::types::NodeKind::Module && node.title == HOME_TITLE
}
