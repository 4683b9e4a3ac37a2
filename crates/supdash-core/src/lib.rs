//! # supdash-core
//!
//! Core functionality for supdash, a support-documentation dashboard.
//!
//! Documentation is a static tree of modules, sections and subsections. This
//! crate resolves URL-style paths against that tree, renders the small inline
//! markup language used in its text, searches it, and builds the navigation
//! menu from it.
//!
//! ## Architecture
//!
//! - **Content**: the embedded tree ([`content`], [`types`]) and key lookup
//!   ([`lookup`])
//! - **Markup**: `~i`, `~b`, `~u` and `~n` rendering ([`markup`])
//! - **Search**: flattened index, ranked conjunctive queries and the search
//!   box session ([`search`], [`highlight`])
//! - **Routing**: page models and override views ([`route`], [`views`]),
//!   with stale-result guarded loading ([`loader`])
//! - **Navigation**: menus, selection and modal handling ([`nav`])
//! - **Assets**: spreadsheet tables ([`sheet`])
//!
//! ## Quick Start
//!
//! ```rust
//! use supdash_core::{ContentTree, RoutePath, SearchIndex, SearchOptions, ViewManifest, resolve};
//!
//! let hits = SearchIndex::builtin().query("tier 1", &SearchOptions::default());
//! assert!(!hits.is_empty());
//!
//! let route = RoutePath::parse(&hits[0].path)?;
//! let resolution = resolve(ContentTree::builtin(), ViewManifest::embedded(), &route);
//! assert!(resolution.content.page().is_some());
//! # Ok::<(), supdash_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Missing content is a display state ([`route::ContentPanel::NotFound`]),
//! not an error, and malformed markup renders as literal text. [`Error`]
//! covers configuration problems, malformed routes and optional assets that
//! failed to load.

/// Configuration file and environment overrides
pub mod config;
/// The embedded content tree
pub mod content;
/// Error types and result aliases
pub mod error;
/// Search-term highlighting
pub mod highlight;
/// Navigation with asynchronous override loading
pub mod loader;
/// Content lookup by route keys
pub mod lookup;
/// Inline markup parser
pub mod markup;
/// Navigation menu state
pub mod nav;
/// Route parsing and page resolution
pub mod route;
/// Search index and query engine
pub mod search;
/// Spreadsheet asset parsing
pub mod sheet;
/// Content node types
pub mod types;
/// String helpers
pub mod utils;
/// Override view manifest and loading
pub mod views;

pub use config::{Config, DisplayConfig, PathsConfig, SearchConfig};
pub use content::ContentTree;
pub use error::{Error, Result};
pub use highlight::{Span, highlight};
pub use loader::{Displayed, LoadedView, Navigator, RequestTracker, Ticket};
pub use lookup::{Located, NotFound, find, normalize_key};
pub use markup::{Fragment, render, strip};
pub use nav::{ClickOutcome, Menu, MenuAction, MenuState, NavAction, NavState, Selection};
pub use route::{ContentPanel, Page, Resolution, RoutePath, resolve};
pub use search::{SearchEntry, SearchIndex, SearchOptions, SearchSession, SessionKey};
pub use sheet::{CellValue, SheetTable};
pub use types::{ContentNode, NodeKind};
pub use views::{EmbeddedViews, OverrideView, ViewManifest, ViewSource};
