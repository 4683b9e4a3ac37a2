//! Error types and handling for supdash-core operations.
//!
//! Most failure paths in the dashboard are display states rather than errors:
//! a path with no matching content renders a "no content" panel, and markup
//! with an unmatched tag degrades to literal text. The [`Error`] type covers
//! what is left over: configuration and I/O problems, malformed route paths,
//! and optional assets (override views, spreadsheets) that failed to load.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading configuration files and spreadsheet assets
//! - **Configuration Errors**: invalid or unreadable settings
//! - **Route Errors**: paths that do not fit the route surface
//! - **Load Errors**: override views or assets that could not be loaded
//! - **Parse / Serialization Errors**: TOML and JSON conversion failures
//!
//! ```rust
//! use supdash_core::Error;
//!
//! let err = Error::Load("teams/index.view: missing title".to_string());
//! assert_eq!(err.category(), "load");
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// The main error type for supdash-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading configuration files and spreadsheet assets from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A route path does not fit `/`, `/:module`, `/:module/:section` or
    /// `/:module/:section/:subsection`.
    #[error("Invalid route: {0}")]
    Route(String),

    /// Requested resource was not found.
    ///
    /// Used for missing override views and spreadsheet assets. Content
    /// lookups report misses through [`crate::lookup::NotFound`] instead.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An optional asset failed to load.
    ///
    /// Callers treat this as "asset absent" and fall back to content-only
    /// rendering.
    #[error("Load failed: {0}")]
    Load(String),

    /// Content could not be parsed (override view TOML, spreadsheet bytes).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Nothing in the dashboard retries automatically; this only tells a
    /// caller whether asking again could plausibly succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Route(_) => "route",
            Self::NotFound(_) => "not_found",
            Self::Load(_) => "load",
            Self::Parse(_) => "parse",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
