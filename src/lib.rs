//! # textextract
//!
//! Extracts the main readable text and the title from an HTML document.
//!
//! Boilerplate (navigation, link farms, scripts and styles) is removed by a
//! word-count scoring pass over the parse tree. The surviving tree is then
//! serialized into newline-separated text, optionally with full stops added
//! at block boundaries so fragments read as sentences.
//!
//! ## Quick Start
//!
//! ```rust
//! use textextract::{extract_with_options, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><p>Main content here</p></body></html>"#;
//!
//! let result = extract_with_options(html, &Options {
//!     min_score: -1,
//!     ..Options::default()
//! })?;
//! assert_eq!(result.title, "My Article");
//! assert!(result.body.contains("Main content here."));
//! # Ok::<(), textextract::Error>(())
//! ```
//!
//! ## Passes
//!
//! - [`dom::parse`] parses HTML into a `dom_query` [`dom::Document`].
//! - [`filter::filter`] scores subtrees and detaches the low-scoring ones.
//! - [`serialize::serialize`] walks what is left and produces the text.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Hyperlink ancestry detection.
pub mod anchor;

/// HTML parsing adapter over `dom_query`.
pub mod dom;

/// Word-count scoring and deferred subtree removal.
pub mod filter;

/// Language tags and list-continuation tokens.
pub mod language;

/// Whitespace/markup collapsing and punctuation checks.
pub mod normalize;

/// Title and body serialization with auto-punctuation.
pub mod serialize;

/// Tag identity for parsed elements.
pub mod tag;

// Public API - re-exports
pub use error::{Error, Result};
pub use language::Language;
pub use options::Options;
pub use result::ExtractResult;

/// Extracts title and main text from an HTML document using default options.
///
/// Defaults prune subtrees scoring 5 or less, add full stops, and use the
/// English list-continuation tokens.
///
/// # Example
///
/// ```rust
/// use textextract::extract;
///
/// let html = "<html><body><nav><a href='/'>Home</a></nav>\
///             <p>This paragraph is long enough to survive the pruning pass</p></body></html>";
/// let result = extract(html)?;
/// assert!(!result.body.contains("Home"));
/// assert!(result.body.contains("survive the pruning pass."));
/// # Ok::<(), textextract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts title and main text from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] when `options.language` is not
/// recognised, and [`Error::ParseError`] when the document cannot be parsed.
/// No partial output is returned on error.
///
/// # Example
///
/// ```rust
/// use textextract::{extract_with_options, Options};
///
/// let options = Options {
///     min_score: -1,
///     language: Some("en-GB".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options("<ul><li>apples and</li></ul>", &options)?;
/// assert_eq!(result.body, "\napples and");
/// # Ok::<(), textextract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}
