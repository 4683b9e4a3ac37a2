//! Override views: extra panels shown beneath a page's content.
//!
//! Views are TOML files under `views/`, embedded at build time. Each file is
//! keyed by its lowercased relative path with `.toml` replaced by `.view`,
//! e.g. `teams/tier-1/tyler.view`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::route::RoutePath;
use crate::utils::slugify;

include!(concat!(env!("OUT_DIR"), "/view_manifest.rs"));

static EMBEDDED: Lazy<ViewManifest> = Lazy::new(|| {
    ViewManifest::from_entries(
        VIEW_SOURCES
            .iter()
            .map(|(key, source)| ((*key).to_string(), (*source).to_string())),
    )
});

/// Map of view key to TOML source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewManifest {
    entries: BTreeMap<String, String>,
}

impl ViewManifest {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, source)| (key.to_lowercase(), source))
                .collect(),
        }
    }

    /// Views compiled into the crate.
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn source(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Candidate view keys for a route, most specific first.
///
/// For `/m/s/sub` the order is `m/s/sub.view`, `m/s/index.view`,
/// `m/s/s.view`, `m/index.view`, `m/m.view`. The root route has none.
pub fn candidate_keys(route: &RoutePath) -> Vec<String> {
    let segments: Vec<String> = route.segments().iter().map(|s| slugify(s)).collect();
    let mut keys = Vec::new();

    if let [module, section, subsection] = segments.as_slice() {
        keys.push(format!("{module}/{section}/{subsection}.view"));
    }
    if let [module, section, ..] = segments.as_slice() {
        keys.push(format!("{module}/{section}/index.view"));
        keys.push(format!("{module}/{section}/{section}.view"));
    }
    if let [module, ..] = segments.as_slice() {
        keys.push(format!("{module}/index.view"));
        keys.push(format!("{module}/{module}.view"));
    }

    keys
}

/// A line in an override view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Parsed override view. `summary` and item values may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideView {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ViewItem>,
    /// Spreadsheet asset shown with the view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl OverrideView {
    pub fn parse(key: &str, source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Load(format!("{key}: {e}")))
    }
}

/// Where override views come from.
#[async_trait]
pub trait ViewSource: Send + Sync {
    /// Keys this source can load.
    fn manifest(&self) -> &ViewManifest;

    async fn load(&self, key: &str) -> Result<OverrideView>;
}

/// Views parsed from a manifest's embedded TOML.
#[derive(Debug, Clone)]
pub struct EmbeddedViews {
    manifest: ViewManifest,
}

impl EmbeddedViews {
    pub const fn new(manifest: ViewManifest) -> Self {
        Self { manifest }
    }
}

impl Default for EmbeddedViews {
    fn default() -> Self {
        Self::new(ViewManifest::embedded().clone())
    }
}

#[async_trait]
impl ViewSource for EmbeddedViews {
    fn manifest(&self) -> &ViewManifest {
        &self.manifest
    }

    async fn load(&self, key: &str) -> Result<OverrideView> {
        let source = self
            .manifest
            .source(key)
            .ok_or_else(|| Error::NotFound(format!("override view '{key}'")))?;
        OverrideView::parse(key, source)
    }
}
