//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Title and body text extracted from an HTML document.
///
/// "Found nothing" is a valid result: both fields are empty strings when the
/// document has no `<title>` text or no surviving body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Normalized text of the last `<title>` element, or empty.
    pub title: String,

    /// Newline-prefixed text chunks in document order.
    pub body: String,
}

impl ExtractResult {
    /// Whether neither a title nor any body text was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    /// Body chunks without their newline prefixes.
    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n').filter(|chunk| !chunk.is_empty())
    }
}
