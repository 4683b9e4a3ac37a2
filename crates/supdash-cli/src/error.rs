//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so scripts can tell a missing page from a broken
//! config without parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments, route or configuration |
//! | 3 | `NotFound` | Requested page or asset not found |
//! | 4 | `InvalidQuery` | Search query rejected |
//! | 5 | `Load` | A spreadsheet or view failed to load |
//!
//! # Usage
//!
//! ```bash
//! supdash show /teams/unknown
//! case $? in
//!     0) echo "Shown" ;;
//!     3) echo "No such page" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;
use std::process::ExitCode;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Includes malformed route paths and unreadable config files.
    Usage = 2,

    /// Requested resource not found (exit code 3).
    NotFound = 3,

    /// Search query rejected (exit code 4).
    InvalidQuery = 4,

    /// An asset failed to load or parse (exit code 5).
    Load = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::InvalidQuery => "invalid query",
            Self::Load => "load error",
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that reach the top level uncategorized.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("not found")
            || msg_lower.contains("no such")
            || msg_lower.contains("does not exist")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("query") {
            return Self::InvalidQuery;
        }

        if msg_lower.contains("load failed")
            || msg_lower.contains("failed to load")
            || msg_lower.contains("parse error")
            || msg_lower.contains("workbook")
        {
            return Self::Load;
        }

        if msg_lower.contains("invalid route")
            || msg_lower.contains("configuration error")
            || msg_lower.contains("invalid argument")
            || msg_lower.contains("invalid value")
        {
            return Self::Usage;
        }

        Self::Internal
    }

    /// Category for a core library error.
    #[must_use]
    pub const fn for_core(err: &supdash_core::Error) -> Self {
        use supdash_core::Error;

        match err {
            Error::Config(_) | Error::Route(_) => Self::Usage,
            Error::NotFound(_) => Self::NotFound,
            Error::Io(_) | Error::Load(_) | Error::Parse(_) => Self::Load,
            Error::Serialization(_) | Error::Other(_) => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so context chains survive.
///
/// ```rust,ignore
/// use supdash_cli::error::CliError;
///
/// let err = CliError::not_found(anyhow::anyhow!("no section matching 'tier 9'"));
/// assert_eq!(err.exit_code(), 3);
/// ```
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a CLI error, inferring the category from the error message.
    pub fn inferred(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        let category = ErrorCategory::infer_from_message(&source.to_string());
        Self { category, source }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Create an invalid-query error.
    pub fn invalid_query(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::InvalidQuery, source)
    }

    /// Create a load error.
    pub fn load(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Load, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }

    /// Create an `ExitCode` from this error.
    #[must_use]
    pub fn as_exit_code(&self) -> ExitCode {
        self.category.as_exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<supdash_core::Error> for CliError {
    fn from(err: supdash_core::Error) -> Self {
        Self::new(ErrorCategory::for_core(&err), err)
    }
}

/// Extension trait for converting errors to `CliError`.
pub trait IntoCliError {
    /// Convert to a `CliError`, inferring the category from the error message.
    fn into_cli_error(self) -> CliError;

    /// Convert to a `CliError` with an explicit category.
    fn with_category(self, category: ErrorCategory) -> CliError;
}

impl<E: Into<anyhow::Error>> IntoCliError for E {
    fn into_cli_error(self) -> CliError {
        CliError::inferred(self)
    }

    fn with_category(self, category: ErrorCategory) -> CliError {
        CliError::new(category, self)
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` or core error anywhere in the chain decides the code;
/// otherwise the category is inferred from the message.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    if let Some(core_err) = err.chain().find_map(|cause| cause.downcast_ref::<supdash_core::Error>()) {
        return ErrorCategory::for_core(core_err).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    mod error_category {
        use super::*;

        #[test]
        fn test_exit_codes() {
            assert_eq!(ErrorCategory::Internal.exit_code(), 1);
            assert_eq!(ErrorCategory::Usage.exit_code(), 2);
            assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
            assert_eq!(ErrorCategory::InvalidQuery.exit_code(), 4);
            assert_eq!(ErrorCategory::Load.exit_code(), 5);
        }

        #[test]
        fn test_infer_not_found() {
            assert_eq!(
                ErrorCategory::infer_from_message("Not found: teams/index.view"),
                ErrorCategory::NotFound
            );
            assert_eq!(
                ErrorCategory::infer_from_message("No such file or directory"),
                ErrorCategory::NotFound
            );
        }

        #[test]
        fn test_infer_query() {
            assert_eq!(
                ErrorCategory::infer_from_message("Query must have at least 2 characters"),
                ErrorCategory::InvalidQuery
            );
        }

        #[test]
        fn test_infer_load() {
            assert_eq!(
                ErrorCategory::infer_from_message("Load failed: Saturday.xlsx"),
                ErrorCategory::Load
            );
        }

        #[test]
        fn test_infer_usage() {
            assert_eq!(
                ErrorCategory::infer_from_message("Invalid route: /a/b/c/d"),
                ErrorCategory::Usage
            );
        }

        #[test]
        fn test_infer_default() {
            assert_eq!(
                ErrorCategory::infer_from_message("Something went wrong"),
                ErrorCategory::Internal
            );
        }

        #[test]
        fn test_core_errors() {
            use supdash_core::Error;

            assert_eq!(
                ErrorCategory::for_core(&Error::Route("too deep".into())),
                ErrorCategory::Usage
            );
            assert_eq!(
                ErrorCategory::for_core(&Error::Config("bad".into())),
                ErrorCategory::Usage
            );
            assert_eq!(
                ErrorCategory::for_core(&Error::NotFound("x.view".into())),
                ErrorCategory::NotFound
            );
            assert_eq!(
                ErrorCategory::for_core(&Error::Load("sheet".into())),
                ErrorCategory::Load
            );
        }
    }

    mod cli_error {
        use super::*;

        #[test]
        fn test_new() {
            let err = CliError::new(ErrorCategory::NotFound, anyhow!("no module matching 'x'"));
            assert_eq!(err.category, ErrorCategory::NotFound);
            assert_eq!(err.exit_code(), 3);
        }

        #[test]
        fn test_convenience_constructors() {
            assert_eq!(CliError::usage(anyhow!("err")).category, ErrorCategory::Usage);
            assert_eq!(
                CliError::not_found(anyhow!("err")).category,
                ErrorCategory::NotFound
            );
            assert_eq!(
                CliError::invalid_query(anyhow!("err")).category,
                ErrorCategory::InvalidQuery
            );
            assert_eq!(CliError::load(anyhow!("err")).category, ErrorCategory::Load);
        }

        #[test]
        fn test_from_core_error() {
            let err = CliError::from(supdash_core::Error::Route("too many segments".into()));
            assert_eq!(err.category, ErrorCategory::Usage);
            assert_eq!(err.to_string(), "Invalid route: too many segments");
        }
    }

    mod exit_code_from_error {
        use super::*;

        #[test]
        fn test_cli_error() {
            let err: anyhow::Error = CliError::not_found(anyhow!("Not found")).into();
            assert_eq!(exit_code_from_error(&err), 3);
        }

        #[test]
        fn test_core_error_with_context() {
            let err = anyhow::Error::new(supdash_core::Error::Load("broken.xlsx".into()))
                .context("Failed to read sheet");
            assert_eq!(exit_code_from_error(&err), 5);
        }

        #[test]
        fn test_regular_error() {
            let err = anyhow!("Something went wrong");
            assert_eq!(exit_code_from_error(&err), 1);
        }

        #[test]
        fn test_with_category() {
            let err = anyhow!("Something failed").with_category(ErrorCategory::Load);
            assert_eq!(err.category, ErrorCategory::Load);
        }
    }
}
