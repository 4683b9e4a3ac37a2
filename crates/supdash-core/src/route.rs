//! Route parsing and page resolution.
//!
//! A route has up to three segments: module, section, subsection. Resolving
//! it always produces a content panel (the page, or a "not found" state for
//! the level that missed) plus the override views that exist for it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::content::{ContentTree, HOME_TITLE};
use crate::error::{Error, Result};
use crate::lookup::{Located, NotFound, find};
use crate::markup::{Fragment, render};
use crate::types::{ContentNode, NodeKind};
use crate::utils::{slugify, title_case};
use crate::views::{ViewManifest, candidate_keys};

/// Most segments a route may have.
pub const MAX_SEGMENTS: usize = 3;

/// A parsed `/`, `/:module`, `/:module/:section` or
/// `/:module/:section/:subsection` path. Segments keep their raw spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        if segments.len() > MAX_SEGMENTS {
            return Err(Error::Route(format!(
                "'{path}' has {} segments; at most {MAX_SEGMENTS} are allowed",
                segments.len()
            )));
        }

        Ok(Self { segments })
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn module(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn section(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn subsection(&self) -> Option<&str> {
        self.segments.get(2).map(String::as_str)
    }

    /// Path made of the first `depth` segments.
    fn prefix(&self, depth: usize) -> String {
        format!("/{}", self.segments[..depth.min(self.depth())].join("/"))
    }

    /// Path of a child node under this route.
    fn child(&self, title: &str) -> String {
        if self.is_root() {
            format!("/{}", slugify(title))
        } else {
            format!("{self}/{}", slugify(title))
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl FromStr for RoutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One breadcrumb entry. Every crumb but the last links to its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A linked child shown on module and section pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildCard {
    pub title: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<Fragment>>,
}

/// The content-derived page for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub kind: NodeKind,
    pub path: String,
    pub breadcrumb: Vec<Crumb>,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<Fragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Fragment>>,
    /// Knowledge-base article id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildCard>,
    pub modal: bool,
    pub mult: bool,
}

impl Page {
    fn build(route: &RoutePath, located: &Located<'_>) -> Self {
        let node = located.node;

        let children = node
            .titled_children()
            .map(|child| ChildCard {
                title: child.title.clone(),
                path: route.child(&child.title),
                info: rendered(child.info.as_deref()),
            })
            .collect();

        Self {
            kind: located.kind,
            path: route.to_string(),
            breadcrumb: breadcrumb(route, node),
            heading: node.title.clone(),
            info: rendered(node.info.as_deref()),
            notes: rendered(node.notes.as_deref()),
            article: node.article.clone(),
            children,
            modal: node.modal,
            mult: node.mult,
        }
    }
}

fn rendered(markup: Option<&str>) -> Option<Vec<Fragment>> {
    markup.map(render).filter(|fragments| !fragments.is_empty())
}

fn breadcrumb(route: &RoutePath, node: &ContentNode) -> Vec<Crumb> {
    if route.is_root() {
        return vec![Crumb {
            label: node.title.clone(),
            link: None,
        }];
    }

    let last = route.depth() - 1;
    route
        .segments()
        .iter()
        .enumerate()
        .map(|(idx, segment)| Crumb {
            label: title_case(segment),
            link: (idx < last).then(|| route.prefix(idx + 1)),
        })
        .collect()
}

/// What the primary panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContentPanel {
    Found(Page),
    NotFound(NotFound),
}

impl ContentPanel {
    pub const fn page(&self) -> Option<&Page> {
        match self {
            Self::Found(page) => Some(page),
            Self::NotFound(_) => None,
        }
    }
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub route: String,
    pub content: ContentPanel,
    /// Override view keys present in the manifest, most specific first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<String>,
}

impl Resolution {
    /// The override view that wins for this route.
    pub fn override_key(&self) -> Option<&str> {
        self.overrides.first().map(String::as_str)
    }
}

/// Resolve `route` against the content tree and view manifest.
///
/// Content and overrides are looked up independently: a route with no
/// content can still have an override view, and the other way round.
pub fn resolve(tree: &ContentTree, manifest: &ViewManifest, route: &RoutePath) -> Resolution {
    let content = match locate(tree, route) {
        Ok(located) => ContentPanel::Found(Page::build(route, &located)),
        Err(miss) => {
            debug!("No content for {route}: {miss}");
            ContentPanel::NotFound(miss)
        },
    };

    let overrides: Vec<String> = candidate_keys(route)
        .into_iter()
        .filter(|key| manifest.contains(key))
        .collect();

    debug!("Resolved {route} with {} override view(s)", overrides.len());

    Resolution {
        route: route.to_string(),
        content,
        overrides,
    }
}

fn locate<'a>(
    tree: &'a ContentTree,
    route: &RoutePath,
) -> std::result::Result<Located<'a>, NotFound> {
    let Some(module) = route.module() else {
        let home = tree.home().ok_or_else(|| NotFound {
            level: NodeKind::Module,
            key: HOME_TITLE.to_lowercase(),
        })?;
        return Ok(Located {
            kind: NodeKind::Module,
            node: home,
            ancestors: [None, None],
        });
    };

    find(tree, module, route.section(), route.subsection())
}
