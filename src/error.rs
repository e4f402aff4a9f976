//! Error types for article search.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`ArticleSearchError`]. A search itself only fails when the object index
//! cannot be reached; everything else (unknown scopes, malformed paging
//! parameters, empty lookups) degrades to defaults.
//!
//! # Examples
//!
//! ```
//! use article_search::error::{ArticleSearchError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(ArticleSearchError::backend("connection refused"))
//! }
//!
//! let err = lookup().unwrap_err();
//! assert!(err.is_backend());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for article search operations.
#[derive(Error, Debug)]
pub enum ArticleSearchError {
    /// The object index could not serve a query.
    #[error("Search backend unavailable: {0}")]
    Backend(String),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input that cannot be coerced to a default, such as
    /// corpus items without a usable id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (corpus and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ArticleSearchError.
pub type Result<T> = std::result::Result<T, ArticleSearchError>;

impl ArticleSearchError {
    /// Create a new backend error.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        ArticleSearchError::Backend(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ArticleSearchError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ArticleSearchError::InvalidArgument(msg.into())
    }

    /// Whether this error means the object index was unreachable.
    pub fn is_backend(&self) -> bool {
        matches!(self, ArticleSearchError::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ArticleSearchError::backend("index offline");
        assert_eq!(
            error.to_string(),
            "Search backend unavailable: index offline"
        );
        assert!(error.is_backend());

        let error = ArticleSearchError::config("facet_limit must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: facet_limit must be positive"
        );
        assert!(!error.is_backend());

        let error = ArticleSearchError::invalid_argument("duplicate item id: 7");
        assert_eq!(error.to_string(), "Invalid argument: duplicate item id: 7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ArticleSearchError::from(io_error);

        match error {
            ArticleSearchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
