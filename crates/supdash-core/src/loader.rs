//! Navigation with asynchronous override loading.
//!
//! Content is resolved synchronously and shown at once. The override view
//! (and the spreadsheet it references) loads afterwards; when it arrives it
//! is applied only if no newer navigation has started in the meantime.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::Config;
use crate::content::ContentTree;
use crate::error::Result;
use crate::route::{Resolution, RoutePath, resolve};
use crate::sheet::{SheetTable, asset_path, load_sheet};
use crate::views::{OverrideView, ViewSource};

/// Identifies one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(u64);

/// Hands out increasing tickets; only the newest is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// A loaded override view and its spreadsheet, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedView {
    pub key: String,
    pub view: OverrideView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<SheetTable>,
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Displayed {
    pub ticket: Ticket,
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<LoadedView>,
}

/// Owns the displayed page and applies override results in order.
pub struct Navigator {
    tree: Arc<ContentTree>,
    views: Arc<dyn ViewSource>,
    assets_dir: PathBuf,
    date_format: String,
    tracker: RequestTracker,
    displayed: RwLock<Option<Displayed>>,
}

impl Navigator {
    pub fn new(tree: Arc<ContentTree>, views: Arc<dyn ViewSource>, config: &Config) -> Self {
        Self {
            tree,
            views,
            assets_dir: config.paths.assets.clone(),
            date_format: config.display.date_format.clone(),
            tracker: RequestTracker::new(),
            displayed: RwLock::new(None),
        }
    }

    /// Snapshot of the displayed page.
    pub async fn displayed(&self) -> Option<Displayed> {
        self.displayed.read().await.clone()
    }

    /// Navigate to `path`.
    ///
    /// Returns `true` when this navigation's override result was applied,
    /// `false` when it was superseded first. Only a malformed path is an
    /// error; missing content and failed loads are display states.
    pub async fn navigate(&self, path: &str) -> Result<bool> {
        let route = RoutePath::parse(path)?;
        let ticket = self.tracker.issue();
        let resolution = resolve(&self.tree, self.views.manifest(), &route);
        let candidates = resolution.overrides.clone();

        *self.displayed.write().await = Some(Displayed {
            ticket,
            resolution,
            view: None,
        });

        let loaded = self.load_override(&candidates).await;

        let mut displayed = self.displayed.write().await;
        match displayed.as_mut() {
            Some(current) if current.ticket == ticket && self.tracker.is_current(ticket) => {
                current.view = loaded;
                Ok(true)
            },
            _ => {
                debug!("Discarding stale override result for {route}");
                Ok(false)
            },
        }
    }

    /// First candidate that loads wins; failures fall through to the next.
    async fn load_override(&self, candidates: &[String]) -> Option<LoadedView> {
        for key in candidates {
            match self.views.load(key).await {
                Ok(view) => {
                    let sheet = match &view.sheet {
                        Some(name) => self.load_asset(name).await,
                        None => None,
                    };
                    return Some(LoadedView {
                        key: key.clone(),
                        view,
                        sheet,
                    });
                },
                Err(e) => warn!("Failed to load override view {key}: {e}"),
            }
        }
        None
    }

    async fn load_asset(&self, name: &str) -> Option<SheetTable> {
        let path = asset_path(&self.assets_dir, name);
        match load_sheet(&path, &self.date_format).await {
            Ok(table) => Some(table),
            Err(e) => {
                debug!("No data for sheet '{name}': {e}");
                None
            },
        }
    }
}
