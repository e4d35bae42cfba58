//! Document-to-text serialization with auto-punctuation.
//!
//! Text nodes are visited in document order and dispatched on their
//! parent's tag:
//!
//! - `<title>` text becomes the extracted title and is kept out of the body.
//! - `<li>` text that closes its item gets a full stop unless it already ends
//!   in punctuation or in a list-continuation token such as `and`.
//! - Heading, paragraph, table-cell and figure-caption text is separated
//!   from the previous block with `. ` and closed with a full stop.
//! - Everything else is appended as is.
//!
//! Every body chunk is prefixed with a newline.

use dom_query::{Document, NodeRef};

use crate::language::Language;
use crate::normalize::{ends_with_punctuation, is_punctuation, normalize_text};
use crate::result::ExtractResult;
use crate::tag::{tag_of, Tag};

const FULL_STOP: &str = ".";

/// Serialize a (possibly pruned) document into a title and body text.
///
/// Punctuation is only added when `auto_punctuate` is set; `language`
/// selects the list-continuation tokens. Serializing the same document
/// twice gives the same output.
///
/// # Example
///
/// ```rust
/// use textextract::{dom, serialize::serialize, Language};
///
/// let document = dom::parse("<title>Doc</title><h1>Intro</h1><p>Body text</p>")?;
/// let result = serialize(&document, true, Language::English);
/// assert_eq!(result.title, "Doc");
/// assert_eq!(result.body, "\nIntro.\nBody text.");
/// # Ok::<(), textextract::Error>(())
/// ```
#[must_use]
pub fn serialize(document: &Document, auto_punctuate: bool, language: Language) -> ExtractResult {
    let mut serializer = Serializer {
        auto_punctuate,
        list_endings: language.list_endings(),
        title: None,
        body: String::new(),
    };
    serializer.run(document.root());
    ExtractResult {
        title: serializer.title.unwrap_or_default(),
        body: serializer.body,
    }
}

struct Serializer {
    auto_punctuate: bool,
    list_endings: &'static [&'static str],
    title: Option<String>,
    body: String,
}

impl Serializer {
    /// Pre-order walk with an explicit stack.
    fn run(&mut self, root: NodeRef) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_text() {
                let text = normalize_text(&node.text());
                if !text.is_empty() {
                    self.visit_text(&node, text);
                }
            }
            stack.extend(node.children().into_iter().rev());
        }
    }

    fn visit_text(&mut self, node: &NodeRef, text: String) {
        let Some(parent) = node.parent() else {
            self.push_chunk(&text);
            return;
        };
        match tag_of(&parent) {
            Some(Tag::Title) => self.title = Some(text),
            Some(Tag::Li) => {
                let text = if self.auto_punctuate && is_last_child(&parent, node) {
                    self.close_list_item(&text)
                } else {
                    text
                };
                self.push_chunk(&text);
            }
            Some(tag) if tag.is_sentence_block() => {
                let text = self.punctuate_block(&parent, node, text);
                self.push_chunk(&text);
            }
            _ => self.push_chunk(&text),
        }
    }

    /// Full stop for the last text of a list item, unless the entry looks
    /// continued (`apples and`, `salt &`, `this /`).
    fn close_list_item(&self, text: &str) -> String {
        let text = text.trim();
        if ends_with_punctuation(text) {
            return text.to_string();
        }
        let continued = self.list_endings.iter().any(|ending| {
            text.strip_suffix(ending).is_some_and(|head| {
                head.chars()
                    .next_back()
                    .is_some_and(|c| is_punctuation(c) || c.is_whitespace())
            })
        });
        if continued {
            text.to_string()
        } else {
            format!("{text}{FULL_STOP}")
        }
    }

    fn punctuate_block(&self, parent: &NodeRef, node: &NodeRef, mut text: String) -> String {
        if !self.auto_punctuate {
            return text;
        }
        if is_first_child(parent, node)
            && !self.body.is_empty()
            && !ends_with_punctuation(&self.body)
        {
            text = format!("{FULL_STOP} {text}");
        }
        if is_last_child(parent, node) {
            let trimmed = text.trim();
            text = if ends_with_punctuation(trimmed) {
                trimmed.to_string()
            } else {
                format!("{trimmed}{FULL_STOP}")
            };
        }
        text
    }

    fn push_chunk(&mut self, text: &str) {
        self.body.push('\n');
        self.body.push_str(text);
    }
}

fn is_first_child(parent: &NodeRef, node: &NodeRef) -> bool {
    parent.first_child().is_some_and(|child| child.id == node.id)
}

fn is_last_child(parent: &NodeRef, node: &NodeRef) -> bool {
    parent.last_child().is_some_and(|child| child.id == node.id)
}
