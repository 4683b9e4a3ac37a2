//! Flattened search index over the content tree.
//!
//! Every module, titled section and titled subsection becomes one
//! [`SearchEntry`]. A query matches an entry when every whitespace-separated
//! term is a substring of the entry's lowercase search text; matches are
//! ranked modules first, then sections, then subsections, keeping tree
//! order within a kind.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::content::{ContentTree, is_home};
use crate::markup::strip;
use crate::types::{ContentNode, NodeKind};
use crate::utils::slugify;

static BUILTIN_INDEX: Lazy<SearchIndex> = Lazy::new(|| SearchIndex::build(ContentTree::builtin()));

/// Default number of results returned by a query.
pub const DEFAULT_LIMIT: usize = 10;

/// Queries shorter than this (after trimming) return nothing.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// One searchable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    pub kind: NodeKind,
    pub path: String,
    /// `Module > Section > Subsection`
    pub title: String,
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    /// Info with markup markers removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip)]
    pub search_text: String,
}

impl SearchEntry {
    fn new(chain: &[&ContentNode]) -> Option<Self> {
        let (node, ancestors) = chain.split_last()?;
        let module = chain.first()?;
        let titles: Vec<&str> = chain.iter().map(|n| n.title.as_str()).collect();

        let path = if chain.len() == 1 && is_home(node) {
            "/".to_string()
        } else {
            let segments: Vec<String> = titles.iter().map(|t| slugify(t)).collect();
            format!("/{}", segments.join("/"))
        };

        let info = node.info.as_deref().map(strip).filter(|s| !s.is_empty());
        let notes = node.notes.as_deref().map(strip);

        let search_text = titles
            .iter()
            .copied()
            .chain(info.as_deref())
            .chain(notes.as_deref())
            .chain(node.article.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Some(Self {
            kind: node.kind,
            path,
            title: titles.join(" > "),
            module: module.title.clone(),
            section: ancestors
                .get(1)
                .map(|s| s.title.clone())
                .or_else(|| (chain.len() == 2).then(|| node.title.clone())),
            subsection: (chain.len() == 3).then(|| node.title.clone()),
            info,
            search_text,
        })
    }

    /// The label for this entry's own level.
    pub fn label(&self) -> &str {
        self.subsection
            .as_deref()
            .or(self.section.as_deref())
            .unwrap_or(&self.module)
    }

    pub fn is_home(&self) -> bool {
        self.kind == NodeKind::Module && self.path == "/"
    }

    /// Every term is a substring of the search text.
    pub fn matches(&self, terms: &[String]) -> bool {
        terms.iter().all(|term| self.search_text.contains(term.as_str()))
    }
}

/// Query tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub limit: usize,
    pub min_query_chars: usize,
    pub include_home: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            include_home: false,
        }
    }
}

impl From<&crate::config::SearchConfig> for SearchOptions {
    fn from(config: &crate::config::SearchConfig) -> Self {
        Self {
            limit: config.limit,
            min_query_chars: config.min_query_chars,
            include_home: config.include_home,
        }
    }
}

/// Lowercased, whitespace-split query terms.
pub fn terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Entries in depth-first tree order.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn build(tree: &ContentTree) -> Self {
        let mut entries = Vec::new();

        for module in tree.modules() {
            entries.extend(SearchEntry::new(&[module]));
            for section in module.titled_children() {
                entries.extend(SearchEntry::new(&[module, section]));
                for subsection in section.titled_children() {
                    entries.extend(SearchEntry::new(&[module, section, subsection]));
                }
            }
        }

        debug!("Built search index with {} entries", entries.len());
        Self { entries }
    }

    /// Index over the embedded content, built on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN_INDEX
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked matches for `query`, capped at `options.limit`.
    pub fn query(&self, query: &str, options: &SearchOptions) -> Vec<&SearchEntry> {
        let mut matches = self.matching(query, options);
        matches.truncate(options.limit);
        matches
    }

    /// Every ranked match, before the limit is applied.
    pub fn matching(&self, query: &str, options: &SearchOptions) -> Vec<&SearchEntry> {
        if query.trim().chars().count() < options.min_query_chars {
            return Vec::new();
        }

        let terms = terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&SearchEntry> = self
            .entries
            .iter()
            .filter(|entry| options.include_home || !entry.is_home())
            .filter(|entry| entry.matches(&terms))
            .collect();

        // Stable: tree order survives within a kind.
        matches.sort_by_key(|entry| entry.kind.rank());

        debug!(
            "Query '{}' matched {} entries (limit {})",
            query,
            matches.len(),
            options.limit
        );
        matches
    }
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// State of the search box: query, dropdown and keyboard selection.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    index: &'a SearchIndex,
    options: SearchOptions,
    query: String,
    results: Vec<&'a SearchEntry>,
    open: bool,
    selected: Option<usize>,
}

impl<'a> SearchSession<'a> {
    pub fn new(index: &'a SearchIndex, options: SearchOptions) -> Self {
        Self {
            index,
            options,
            query: String::new(),
            results: Vec::new(),
            open: false,
            selected: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[&'a SearchEntry] {
        &self.results
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Replace the query text and recompute results.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.results = self.index.query(text, &self.options);
        self.open = !self.results.is_empty();
        self.selected = None;
    }

    /// Reopen the dropdown if there are results to show.
    pub fn focus(&mut self) {
        if !self.results.is_empty() {
            self.open = true;
        }
    }

    /// Handle a key press. Returns the path to navigate to, if any.
    pub fn key(&mut self, key: SessionKey) -> Option<String> {
        if !self.open {
            return None;
        }

        match key {
            SessionKey::ArrowDown => {
                let last = self.results.len().checked_sub(1)?;
                self.selected = Some(self.selected.map_or(0, |idx| (idx + 1).min(last)));
                None
            },
            SessionKey::ArrowUp => {
                self.selected = self.selected.and_then(|idx| idx.checked_sub(1));
                None
            },
            SessionKey::Enter => {
                let path = self.results.get(self.selected?)?.path.clone();
                self.reset();
                Some(path)
            },
            SessionKey::Escape => {
                self.open = false;
                self.selected = None;
                None
            },
        }
    }

    /// Pick a result directly, as a click would.
    pub fn choose(&mut self, idx: usize) -> Option<String> {
        let path = self.results.get(idx)?.path.clone();
        self.reset();
        Some(path)
    }

    fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.open = false;
        self.selected = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn index() -> &'static SearchIndex {
        SearchIndex::builtin()
    }

    fn paths(results: &[&SearchEntry]) -> Vec<String> {
        results.iter().map(|e| e.path.clone()).collect()
    }

    #[test]
    fn test_index_has_one_entry_per_titled_node() {
        // Home, Teams, 3 sections, 13 subsections
        assert_eq!(index().len(), 1 + 1 + 3 + 13);
        assert_eq!(index().entries()[0].path, "/");
        assert!(index().entries()[0].is_home());
    }

    #[test]
    fn test_entry_fields() {
        let entry = index()
            .entries()
            .iter()
            .find(|e| e.path == "/teams/tier-2/full-time-agents")
            .unwrap();

        assert_eq!(entry.kind, NodeKind::Subsection);
        assert_eq!(entry.title, "Teams > Tier 2 > Full-Time Agents");
        assert_eq!(entry.module, "Teams");
        assert_eq!(entry.section.as_deref(), Some("Tier 2"));
        assert_eq!(entry.subsection.as_deref(), Some("Full-Time Agents"));
        assert_eq!(entry.label(), "Full-Time Agents");
        assert_eq!(
            entry.info.as_deref(),
            Some("info requirements text (supports markup tags)")
        );

        // Markup is stripped, not rendered
        assert_eq!(index().entries()[0].info.as_deref(), Some("None"));
    }

    #[test]
    fn test_section_entry_fields() {
        let entry = index()
            .entries()
            .iter()
            .find(|e| e.path == "/teams/operations")
            .unwrap();

        assert_eq!(entry.kind, NodeKind::Section);
        assert_eq!(entry.section.as_deref(), Some("Operations"));
        assert!(entry.subsection.is_none());
        assert!(entry.search_text.contains("ops team"));
    }

    #[test]
    fn test_search_text_is_lowercase_and_stripped() {
        for entry in index().entries() {
            assert_eq!(entry.search_text, entry.search_text.to_lowercase());
            assert!(!entry.search_text.contains("~b"));
            assert!(!entry.search_text.contains("~n"));
        }
    }

    #[test]
    fn test_query_is_conjunctive() {
        // Given: "tier" and "1" need not be adjacent
        let results = index().query("tier 1", &SearchOptions::default());

        // Then: every result contains both terms
        assert!(!results.is_empty());
        for entry in &results {
            assert!(entry.search_text.contains("tier"));
            assert!(entry.search_text.contains('1'));
        }
        assert!(paths(&results).contains(&"/teams/tier-1".to_string()));
    }

    #[test]
    fn test_empty_and_short_queries_return_nothing() {
        let options = SearchOptions::default();
        assert!(index().query("", &options).is_empty());
        assert!(index().query("   ", &options).is_empty());
        assert!(index().query("t", &options).is_empty());

        let permissive = SearchOptions {
            min_query_chars: 0,
            ..SearchOptions::default()
        };
        assert!(index().query("  ", &permissive).is_empty());
        assert!(!index().query("t", &permissive).is_empty());
    }

    #[test]
    fn test_home_excluded_unless_requested() {
        let default = index().query("notes", &SearchOptions::default());
        assert!(default.iter().all(|e| !e.is_home()));

        let with_home = index().query(
            "notes",
            &SearchOptions {
                include_home: true,
                ..SearchOptions::default()
            },
        );
        assert_eq!(with_home.first().map(|e| e.path.as_str()), Some("/"));
    }

    #[test]
    fn test_results_are_ranked_and_capped() {
        // Given: a tree where every node mentions "agent"
        let subs: Vec<ContentNode> = (0..8)
            .map(|i| ContentNode::subsection(&format!("Agent {i}")))
            .collect();
        let tree = ContentTree::new(vec![
            ContentNode::module("Agents").with_children(vec![
                ContentNode::section("Agent Pool").with_children(subs),
                ContentNode::section("Agent Leads"),
            ]),
            ContentNode::module("Agent Tools"),
        ]);
        let index = SearchIndex::build(&tree);

        // When
        let all = index.matching("agent", &SearchOptions::default());
        let capped = index.query("agent", &SearchOptions::default());

        // Then: 12 matches, capped at 10, modules then sections then subsections
        assert_eq!(all.len(), 12);
        assert_eq!(capped.len(), DEFAULT_LIMIT);
        let ranks: Vec<u8> = capped.iter().map(|e| e.kind.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(
            paths(&capped[..4]),
            vec!["/agents", "/agent-tools", "/agents/agent-pool", "/agents/agent-leads"]
        );
        assert_eq!(capped[4].path, "/agents/agent-pool/agent-0");
    }

    #[test]
    fn test_untitled_nodes_are_skipped() {
        let tree = ContentTree::new(vec![ContentNode::module("Docs").with_children(vec![
            ContentNode::section("").with_children(vec![ContentNode::subsection("Orphan")]),
            ContentNode::section("Guides")
                .with_children(vec![ContentNode::subsection(" ")]),
        ])]);
        let index = SearchIndex::build(&tree);

        let titles: Vec<&str> = index.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Docs", "Docs > Guides"]);
    }

    #[test]
    fn test_session_typing_opens_dropdown() {
        let mut session = SearchSession::new(index(), SearchOptions::default());

        session.input("tyler");
        assert!(session.is_open());
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.selected(), None);

        session.input("");
        assert!(!session.is_open());
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_session_keyboard_navigation() {
        let mut session = SearchSession::new(index(), SearchOptions::default());
        session.input("tier");
        let count = session.results().len();
        assert!(count > 2);

        // Down clamps at the last result
        for _ in 0..count + 3 {
            assert_eq!(session.key(SessionKey::ArrowDown), None);
        }
        assert_eq!(session.selected(), Some(count - 1));

        // Up walks back to no selection
        for _ in 0..count + 3 {
            session.key(SessionKey::ArrowUp);
        }
        assert_eq!(session.selected(), None);

        // Enter without a selection does nothing
        assert_eq!(session.key(SessionKey::Enter), None);
        assert!(session.is_open());

        session.key(SessionKey::ArrowDown);
        let first = session.results()[0].path.clone();
        assert_eq!(session.key(SessionKey::Enter), Some(first));
        assert!(!session.is_open());
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_session_escape_and_focus() {
        let mut session = SearchSession::new(index(), SearchOptions::default());
        session.input("walker");
        session.key(SessionKey::ArrowDown);

        session.key(SessionKey::Escape);
        assert!(!session.is_open());
        assert_eq!(session.selected(), None);

        // Keys are ignored while closed
        assert_eq!(session.key(SessionKey::ArrowDown), None);
        assert_eq!(session.selected(), None);

        session.focus();
        assert!(session.is_open());
        assert_eq!(
            session.choose(0),
            Some("/teams/tier-1/walker".to_string())
        );
    }
}
