//! HTML parsing adapter.
//!
//! Parses with `dom_query` (html5ever). The scoring and serialization passes
//! run directly on the resulting [`Document`]; pruning detaches nodes in
//! place with `NodeRef::remove_from_parent`.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};

use crate::error::{Error, Result};

/// Parse an HTML string into a [`Document`].
///
/// html5ever recovers from malformed markup (unclosed tags, stray end tags,
/// broken attributes), so the only failure is a parse that produces no
/// element at all under the document root.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the parsed document has no element.
///
/// # Example
///
/// ```rust
/// use textextract::dom::parse;
///
/// let document = parse("<p>Hello</p>")?;
/// assert!(document.select("p").exists());
/// # Ok::<(), textextract::Error>(())
/// ```
pub fn parse(html: &str) -> Result<Document> {
    let document = Document::from(html);
    check_document(&document)?;
    Ok(document)
}

/// Check that an already parsed document has a root element.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when no child of the document root is an
/// element.
pub fn check_document(document: &Document) -> Result<()> {
    if document.root().children().iter().any(NodeRef::is_element) {
        Ok(())
    } else {
        Err(Error::ParseError("document has no root element".to_string()))
    }
}
