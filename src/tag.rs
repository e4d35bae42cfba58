//! Tag identity for parsed elements.
//!
//! Element names coming out of `dom_query` are resolved into a [`Tag`] once,
//! through [`tag_of`]; the passes never compare raw name strings.

use std::fmt;

use dom_query::NodeRef;

/// Tag identity, resolved from the lowercased element name.
///
/// Each named variant mirrors the HTML element of the same name; every
/// other element keeps its lowercased name in [`Tag::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Script,
    Style,
    Link,
    Title,
    Li,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Th,
    Td,
    Figcaption,
    /// Any element without special handling, by lowercased name.
    Other(String),
}

impl Tag {
    /// Resolve a tag name case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "a" => Self::A,
            "script" => Self::Script,
            "style" => Self::Style,
            "link" => Self::Link,
            "title" => Self::Title,
            "li" => Self::Li,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "p" => Self::P,
            "th" => Self::Th,
            "td" => Self::Td,
            "figcaption" => Self::Figcaption,
            _ => Self::Other(lower),
        }
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "a",
            Self::Script => "script",
            Self::Style => "style",
            Self::Link => "link",
            Self::Title => "title",
            Self::Li => "li",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Th => "th",
            Self::Td => "td",
            Self::Figcaption => "figcaption",
            Self::Other(name) => name,
        }
    }

    /// Text under these tags never counts towards a score.
    #[must_use]
    pub fn is_ignored_for_scoring(&self) -> bool {
        matches!(self, Self::Script | Self::Style | Self::Link)
    }

    /// Headings, paragraphs, table cells and figure captions.
    #[must_use]
    pub fn is_sentence_block(&self) -> bool {
        matches!(
            self,
            Self::H1
                | Self::H2
                | Self::H3
                | Self::H4
                | Self::H5
                | Self::H6
                | Self::P
                | Self::Th
                | Self::Td
                | Self::Figcaption
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of an element node, `None` for text, comments, doctypes and the
/// document itself.
#[must_use]
pub fn tag_of(node: &NodeRef) -> Option<Tag> {
    node.node_name().map(|name| Tag::from_name(&name))
}

/// Tag of the node's parent, if the parent is an element.
#[must_use]
pub fn parent_tag(node: &NodeRef) -> Option<Tag> {
    node.parent().as_ref().and_then(tag_of)
}
