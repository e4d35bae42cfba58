//! Configuration options for text extraction.
//!
//! The `Options` struct controls how aggressively boilerplate is pruned and
//! whether sentence punctuation is synthesised at block boundaries.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;

/// Configuration options for text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use textextract::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.min_score, 5);
///
/// // Keep everything, no punctuation
/// let options = Options {
///     min_score: -1,
///     auto_punctuate: false,
///     ..Options::default()
/// };
/// assert!(!options.filtering_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Subtrees scoring at or below this value are pruned.
    ///
    /// A negative value disables pruning entirely.
    ///
    /// Default: `5`
    pub min_score: i64,

    /// Insert full stops at block and list-item boundaries.
    ///
    /// Default: `true`
    pub auto_punctuate: bool,

    /// Language tag (`en`, `en-GB`, ...) selecting the list-continuation
    /// tokens. `None` means English.
    ///
    /// Default: `None`
    pub language: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_score: 5,
            auto_punctuate: true,
            language: None,
        }
    }
}

impl Options {
    /// Whether the pruning pass runs at all.
    #[must_use]
    pub fn filtering_enabled(&self) -> bool {
        self.min_score >= 0
    }

    /// The configured language, defaulting to English.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`](crate::Error::UnsupportedLanguage)
    /// when the tag has no continuation-token table.
    pub fn resolved_language(&self) -> Result<Language> {
        self.language
            .as_deref()
            .map_or(Ok(Language::default()), str::parse::<Language>)
    }
}
