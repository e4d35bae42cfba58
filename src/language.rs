//! Language selection for list-item auto-punctuation.
//!
//! Each supported language carries a closed set of tokens that mark a list
//! entry as continued (e.g. `apples and`), which suppresses the terminating
//! full stop.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A language with a list-continuation token table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
}

const ENGLISH_LIST_ENDINGS: &[&str] = &["&", "and", "/", "or"];

impl Language {
    /// Tokens that mark a list entry as continued.
    #[must_use]
    pub fn list_endings(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH_LIST_ENDINGS,
        }
    }

    /// Two-letter ISO 639-1 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parse a language tag such as `en`, `en-US` or `EN_gb`.
    ///
    /// Only the first two characters are inspected, case-insensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let prefix = tag
            .char_indices()
            .nth(2)
            .map_or(tag, |(end, _)| &tag[..end]);
        if prefix.chars().count() < 2 {
            return Err(Error::UnsupportedLanguage(tag.to_string()));
        }
        match prefix.to_lowercase().as_str() {
            "en" => Ok(Self::English),
            _ => Err(Error::UnsupportedLanguage(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_variants() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("en-US".parse::<Language>(), Ok(Language::English));
        assert_eq!("EN_gb".parse::<Language>(), Ok(Language::English));
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
    }

    #[test]
    fn test_parse_rejects_short_and_unknown_tags() {
        for tag in ["", "e", "fr", "de-DE", "ée"] {
            assert_eq!(
                tag.parse::<Language>(),
                Err(Error::UnsupportedLanguage(tag.to_string())),
                "tag {tag:?}"
            );
        }
    }

    #[test]
    fn test_english_list_endings() {
        assert_eq!(Language::English.list_endings(), &["&", "and", "/", "or"]);
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.to_string(), "en");
    }
}
