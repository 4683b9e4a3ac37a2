use serde::{Deserialize, Serialize};

/// Depth of a node in the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Module,
    Section,
    Subsection,
}

impl NodeKind {
    /// Ordering rank used by search results (modules first).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Module => 0,
            Self::Section => 1,
            Self::Subsection => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Section => "section",
            Self::Subsection => "subsection",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One module, section or subsection of documentation.
///
/// `info`, `notes` and `article` hold raw markup. `mult` only has an effect
/// when `modal` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub kind: NodeKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default)]
    pub modal: bool,
    #[serde(default)]
    pub mult: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    fn new(kind: NodeKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            info: None,
            notes: None,
            article: None,
            modal: false,
            mult: false,
            children: Vec::new(),
        }
    }

    pub fn module(title: &str) -> Self {
        Self::new(NodeKind::Module, title)
    }

    pub fn section(title: &str) -> Self {
        Self::new(NodeKind::Section, title)
    }

    pub fn subsection(title: &str) -> Self {
        Self::new(NodeKind::Subsection, title)
    }

    /// Set the info markup. Empty strings are stored as absent.
    pub fn with_info(mut self, info: &str) -> Self {
        self.info = non_empty(info);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = non_empty(notes);
        self
    }

    pub fn with_article(mut self, article: &str) -> Self {
        self.article = non_empty(article);
        self
    }

    pub const fn with_modal(mut self, modal: bool, mult: bool) -> Self {
        self.modal = modal;
        self.mult = mult;
        self
    }

    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Children that carry a title; untitled placeholders are skipped by
    /// the menu and the search index.
    pub fn titled_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(|child| child.has_title())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
