//! Content lookup by route keys.
//!
//! Keys are compared after [`normalize_key`], so the URL segment `tier-1`,
//! the stored title `Tier 1` and `TIER-1` all name the same section. Each
//! level is matched independently and a miss stops the walk; there is no
//! fuzzy or partial matching.

use serde::Serialize;

use crate::content::ContentTree;
use crate::types::{ContentNode, NodeKind};

/// A node found by [`find`], with the chain of nodes above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    pub kind: NodeKind,
    pub node: &'a ContentNode,
    /// Module first, then section; empty for modules.
    pub ancestors: [Option<&'a ContentNode>; 2],
}

impl<'a> Located<'a> {
    pub fn module(&self) -> &'a ContentNode {
        self.ancestors[0].unwrap_or(self.node)
    }

    pub fn section(&self) -> Option<&'a ContentNode> {
        match self.kind {
            NodeKind::Module => None,
            NodeKind::Section => Some(self.node),
            NodeKind::Subsection => self.ancestors[1],
        }
    }

    /// Titles from the module down to this node.
    pub fn title_chain(&self) -> Vec<&'a str> {
        self.ancestors
            .iter()
            .flatten()
            .map(|node| node.title.as_str())
            .chain(std::iter::once(self.node.title.as_str()))
            .collect()
    }
}

/// The level at which a lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("no {level} matching '{key}'")]
pub struct NotFound {
    pub level: NodeKind,
    pub key: String,
}

/// Lowercase, then turn every `-` into a space.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace('-', " ")
}

/// Find the node addressed by up to three keys.
///
/// Empty keys count as absent, matching how route segments are split.
pub fn find<'a>(
    tree: &'a ContentTree,
    module_key: &str,
    section_key: Option<&str>,
    subsection_key: Option<&str>,
) -> Result<Located<'a>, NotFound> {
    let section_key = section_key.filter(|key| !key.is_empty());
    let subsection_key = subsection_key.filter(|key| !key.is_empty());

    let module = match_child(tree.modules(), module_key, NodeKind::Module)?;

    let Some(section_key) = section_key else {
        return Ok(Located {
            kind: NodeKind::Module,
            node: module,
            ancestors: [None, None],
        });
    };

    let section = match_child(&module.children, section_key, NodeKind::Section)?;

    let Some(subsection_key) = subsection_key else {
        return Ok(Located {
            kind: NodeKind::Section,
            node: section,
            ancestors: [Some(module), None],
        });
    };

    let subsection = match_child(&section.children, subsection_key, NodeKind::Subsection)?;

    Ok(Located {
        kind: NodeKind::Subsection,
        node: subsection,
        ancestors: [Some(module), Some(section)],
    })
}

fn match_child<'a>(
    siblings: &'a [ContentNode],
    key: &str,
    level: NodeKind,
) -> Result<&'a ContentNode, NotFound> {
    let wanted = normalize_key(key);
    siblings
        .iter()
        .find(|node| normalize_key(&node.title) == wanted)
        .ok_or_else(|| NotFound {
            level,
            key: key.to_string(),
        })
}
