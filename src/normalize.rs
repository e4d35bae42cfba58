//! Text fragment normalization and punctuation helpers.

use crate::patterns::{COLLAPSIBLE_RUN, PUNCTUATION};

/// Collapse a raw text fragment to a single trimmed line.
///
/// Embedded angle-bracket sequences are removed, runs of newlines, tabs and
/// spaces become one space, and leading/trailing spaces are trimmed. An
/// all-whitespace input yields an empty string.
///
/// # Example
///
/// ```rust
/// use textextract::normalize::normalize_text;
///
/// assert_eq!(normalize_text("  Hello\n\t<b>world</b>  "), "Hello world");
/// assert_eq!(normalize_text(" \n "), "");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    COLLAPSIBLE_RUN
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}

/// Number of single-space separated fields in normalized text.
///
/// An empty string counts as one word.
#[must_use]
pub fn word_count(normalized: &str) -> usize {
    normalized.split(' ').count()
}

/// Whether `c` is in Unicode general category P.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

/// Whether the last character of `text` is punctuation.
///
/// Empty input has no last character and returns `false`.
#[must_use]
pub fn ends_with_punctuation(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_punctuation)
}
