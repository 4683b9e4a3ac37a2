//! Configuration management for supdash.
//!
//! Settings live in a single TOML file. Every section and key is optional;
//! anything left out takes its default.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Defaults**: compiled in (see [`Config::default`])
//! 2. **Config file**: platform config directory, or an explicit path
//! 3. **Environment variables**: `SUPDASH_ASSETS_DIR`, `SUPDASH_SEARCH_LIMIT`
//!
//! ## Example
//!
//! ```rust
//! use supdash_core::Config;
//!
//! let config: Config = toml::from_str("[search]\nlimit = 5\n")?;
//! assert_eq!(config.search.limit, 5);
//! assert_eq!(config.search.min_query_chars, 2);
//! # Ok::<(), toml::de::Error>(())
//! ```

use crate::search::{DEFAULT_LIMIT, DEFAULT_MIN_QUERY_CHARS};
use crate::sheet::{DEFAULT_DATE_FORMAT, is_valid_date_format};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `paths.assets`.
pub const ENV_ASSETS_DIR: &str = "SUPDASH_ASSETS_DIR";

/// Environment variable overriding `search.limit`.
pub const ENV_SEARCH_LIMIT: &str = "SUPDASH_SEARCH_LIMIT";

/// Global configuration.
///
/// ## File Location
///
/// - Linux: `~/.config/supdash/config.toml`
/// - macOS: `~/Library/Application Support/dev.supdash.supdash/config.toml`
/// - Windows: `%APPDATA%\supdash\supdash\config\config.toml`
///
/// ## Example Configuration File
///
/// ```toml
/// [search]
/// limit = 10
/// min_query_chars = 2
/// include_home = false
///
/// [display]
/// date_format = "%-m/%-d/%Y"
///
/// [paths]
/// assets = "/home/user/.local/share/supdash/assets"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub display: DisplayConfig,
    pub paths: PathsConfig,
}

/// Search box behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum results shown.
    pub limit: usize,
    /// Queries shorter than this return nothing.
    pub min_query_chars: usize,
    /// Whether the `Home` placeholder appears in results.
    pub include_home: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            include_home: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `chrono` pattern for spreadsheet dates.
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding spreadsheet assets.
    pub assets: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            assets: directories::ProjectDirs::from("dev", "supdash", "supdash").map_or_else(
                || PathBuf::from("assets"),
                |dirs| dirs.data_dir().join("assets"),
            ),
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load an explicit file (which must exist), then apply environment
    /// overrides. `None` behaves like [`Config::load`].
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::load();
        };

        let mut config = Self::load_from(path)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a config file without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse as TOML but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_date_format(&self.display.date_format) {
            return Err(Error::Config(format!(
                "Invalid display.date_format '{}'",
                self.display.date_format
            )));
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(ENV_ASSETS_DIR).filter(|value| !value.is_empty()) {
            self.paths.assets = PathBuf::from(dir);
        }

        if let Some(limit) = lookup(ENV_SEARCH_LIMIT).filter(|value| !value.is_empty()) {
            self.search.limit = limit.trim().parse().map_err(|e| {
                Error::Config(format!("Invalid {ENV_SEARCH_LIMIT} '{limit}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Default config file path for this platform.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "supdash", "supdash")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
