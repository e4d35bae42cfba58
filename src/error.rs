//! Error types for textextract.
//!
//! Both variants are terminal for a call: nothing is retried and no partial
//! output is returned. Documents without extractable text are not errors.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested language has no list-continuation table.
    #[error("language not supported: {0}")]
    UnsupportedLanguage(String),

    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
