//! Compiled regex patterns for text normalization.
//!
//! All patterns are compiled once at first use using `LazyLock` and reused
//! for every extraction call.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of embedded markup, newlines, tabs and spaces.
///
/// Each run is collapsed to a single space. Other whitespace (e.g. `\r`)
/// is left alone.
pub static COLLAPSIBLE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<[^>]*>|[\n\t ])+").expect("COLLAPSIBLE_RUN regex")
});

/// Matches a single Unicode punctuation character (general category P).
pub static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\p{P}\z").expect("PUNCTUATION regex"));
