//! Word-count scoring and boilerplate pruning.
//!
//! One post-order walk scores every subtree and records the low-scoring ones;
//! the records are applied only after the walk completes, so the walk never
//! iterates over a child list it has modified.
//!
//! ## Scoring
//!
//! Every node is visited with a baseline: the running score its parent was
//! called with. Siblings all branch from that same baseline.
//!
//! - A text node returns `baseline + words`, or `baseline - ((1 + words) ^ 2)`
//!   when it sits inside an `<a>`, or just `baseline` when its parent is
//!   `<script>`, `<style>` or `<link>`. The `^` is a bitwise XOR.
//! - Any other node starts its total at the baseline and adds the score
//!   returned by each child. A total at or below the threshold marks the
//!   node for removal unless the node is an `<a>`.

use dom_query::{Document, NodeId, NodeRef};
use tracing::{debug, trace};

use crate::anchor::is_in_anchor;
use crate::normalize::{normalize_text, word_count};
use crate::tag::{parent_tag, tag_of, Tag};

/// A subtree queued for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    /// `None` for the document root, which is never removed.
    pub parent: Option<NodeId>,
    pub child: NodeId,
}

/// Prune every subtree scoring at or below `min_score`.
///
/// A negative `min_score` disables pruning and leaves the document
/// untouched. Returns the number of subtrees detached.
///
/// # Example
///
/// ```rust
/// use textextract::{dom, filter};
///
/// let document = dom::parse(
///     "<div><a href='/'>Home</a><a href='/x'>About</a></div>\
///      <article><p>Enough plain words here to survive the pruning pass.</p></article>",
/// )?;
/// filter::filter(&document, 5);
/// assert!(!document.select("div").exists());
/// assert!(document.select("p").exists());
/// # Ok::<(), textextract::Error>(())
/// ```
pub fn filter(document: &Document, min_score: i64) -> usize {
    if min_score < 0 {
        trace!(min_score, "pruning disabled");
        return 0;
    }
    let deletions = collect_deletions(document, min_score);
    let removed = apply_deletions(document, &deletions);
    debug!(min_score, queued = deletions.len(), removed, "pruned low-scoring subtrees");
    removed
}

/// Score the whole document and return the subtrees that should be removed.
///
/// The document is not modified. Records come out in post-order, so a
/// node's descendants are queued before the node itself.
#[must_use]
pub fn collect_deletions(document: &Document, min_score: i64) -> Vec<Deletion> {
    let mut scorer = Scorer {
        min_score,
        deletions: Vec::new(),
    };
    scorer.score(&document.root(), 0);
    scorer.deletions
}

/// Detach every recorded subtree, in any order.
///
/// Records whose child is no longer attached to the recorded parent are
/// skipped. Returns how many records were applied.
pub fn apply_deletions(document: &Document, deletions: &[Deletion]) -> usize {
    deletions
        .iter()
        .filter(|deletion| detach(document, deletion))
        .count()
}

fn detach(document: &Document, deletion: &Deletion) -> bool {
    let Some(parent) = deletion.parent else {
        return false;
    };
    let Some(child) = document.tree.get(&deletion.child) else {
        return false;
    };
    if child.parent().map(|p| p.id) != Some(parent) {
        return false;
    }
    child.remove_from_parent();
    true
}

/// Score of the whole document as seen from the root.
#[must_use]
pub fn document_score(document: &Document) -> i64 {
    let mut scorer = Scorer {
        min_score: i64::MIN,
        deletions: Vec::new(),
    };
    scorer.score(&document.root(), 0)
}

struct Scorer {
    min_score: i64,
    deletions: Vec<Deletion>,
}

impl Scorer {
    fn score(&mut self, node: &NodeRef, baseline: i64) -> i64 {
        if node.is_text() {
            return baseline + text_contribution(node);
        }

        let mut total = baseline;
        for child in node.children() {
            total += self.score(&child, baseline);
        }

        if total <= self.min_score && tag_of(node) != Some(Tag::A) {
            self.deletions.push(Deletion {
                parent: node.parent().map(|p| p.id),
                child: node.id,
            });
        }
        total
    }
}

fn text_contribution(node: &NodeRef) -> i64 {
    if parent_tag(node).is_some_and(|tag| tag.is_ignored_for_scoring()) {
        return 0;
    }

    let words = i64::try_from(word_count(&normalize_text(&node.text()))).unwrap_or(i64::MAX);
    if is_in_anchor(node) {
        -((1 + words) ^ 2)
    } else {
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A document whose root holds a single `<name>` element with `text`,
    /// built by hand so the parser cannot relocate or drop it.
    fn lone_element(name: &str, text: &str) -> Document {
        let doc = Document::default();
        let element = doc.tree.new_element(name);
        let content = doc.tree.new_text(text);
        element.append_child(&content);
        doc.root().append_child(&element);
        doc
    }

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes()[0]
    }

    #[test]
    fn test_plain_text_scores_word_count() {
        let doc = Document::from("<p>one two three</p>");
        // html = head (0) + body, body = p, p = 3
        assert_eq!(document_score(&doc), 3);
    }

    #[test]
    fn test_whitespace_text_counts_one_word() {
        let doc = Document::from("<div> \n\t </div>");
        assert_eq!(document_score(&doc), 1);
    }

    #[test]
    fn test_anchor_penalty_is_bitwise_xor() {
        for (words, penalty) in [("a", 0), ("a b", 1), ("a b c", 6), ("a b c d", 7)] {
            let doc = Document::from(format!("<a href='/'>{words}</a>"));
            assert_eq!(document_score(&doc), -penalty, "words {words:?}");
        }
    }

    #[test]
    fn test_script_style_link_text_is_ignored() {
        for tag in ["script", "style", "link", "SCRIPT"] {
            let doc = lone_element(tag, "lots of words that would otherwise count");
            assert_eq!(document_score(&doc), 0, "tag {tag}");
        }
        let doc = Document::from("<script>var a = 1;</script><style>p { margin: 0 }</style>");
        assert_eq!(document_score(&doc), 0);
    }

    #[test]
    fn test_siblings_branch_from_parent_baseline() {
        let doc = Document::from("<p>a b</p><p>c d e</p>");
        // p1 = 2, p2 = 3 (both from baseline 0), body = 0 + 2 + 3
        assert_eq!(document_score(&doc), 5);
    }

    #[test]
    fn test_nested_totals_add_up() {
        let doc = Document::from("<div id='outer'>x y<div id='inner'>z</div></div>");
        let outer = first(&doc, "#outer");
        let inner = first(&doc, "#inner");
        // inner = 0 + 1, outer = 0 + 2 + 1
        assert_eq!(document_score(&doc), 3);

        let deletions = collect_deletions(&doc, 1);
        assert!(deletions.contains(&Deletion {
            parent: Some(outer.id),
            child: inner.id
        }));
        assert!(deletions.iter().all(|d| d.child != outer.id));
    }

    #[test]
    fn test_descendants_are_queued_before_ancestors() {
        let doc = Document::from("<section><span>b</span></section>");
        let section = first(&doc, "section");
        let span = first(&doc, "span");
        let deletions = collect_deletions(&doc, 5);
        let position = |id: NodeId| deletions.iter().position(|d| d.child == id);
        assert!(position(span.id) < position(section.id));
        assert!(position(span.id).is_some());
    }

    #[test]
    fn test_low_scoring_subtree_is_removed() {
        let doc =
            Document::from("<div>short</div><p>this paragraph has plenty of words in it</p>");
        let div = first(&doc, "div");
        let p = first(&doc, "p");

        let removed = filter(&doc, 5);
        assert!(removed >= 1);
        assert!(div.parent().is_none());
        assert!(!doc.select("div").exists());
        assert!(p.parent().is_some());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_anchor_is_never_queued() {
        let doc = Document::from(
            "<div><a href='/'>home</a><a href='/a'>about</a><a href='/c'>contact</a></div>",
        );
        let div = first(&doc, "div");
        let anchors: Vec<NodeId> = doc.select("a").nodes().iter().map(|a| a.id).collect();
        assert_eq!(anchors.len(), 3);

        let deletions = collect_deletions(&doc, 5);
        assert!(deletions.iter().all(|d| !anchors.contains(&d.child)));
        assert!(deletions.iter().any(|d| d.child == div.id));
    }

    #[test]
    fn test_negative_threshold_leaves_document_identical() {
        let doc = Document::from("<div>x</div>");
        let before = doc.html();
        assert_eq!(filter(&doc, -1), 0);
        assert_eq!(doc.html(), before);
    }

    #[test]
    fn test_deletion_order_does_not_matter() {
        let forward = Document::from("<div>a</div><section><span>b</span></section>");
        let backward = forward.clone();

        let deletions = collect_deletions(&forward, 5);
        assert!(deletions.len() > 2);
        apply_deletions(&forward, &deletions);
        let reversed: Vec<_> = deletions.iter().rev().copied().collect();
        apply_deletions(&backward, &reversed);

        assert_eq!(forward.html(), backward.html());
        // applying again is a no-op
        let snapshot = forward.html();
        assert_eq!(apply_deletions(&forward, &deletions), 0);
        assert_eq!(forward.html(), snapshot);
    }

    #[test]
    fn test_record_with_stale_parent_is_skipped() {
        let doc = Document::from("<div><p>kept</p></div>");
        let body = first(&doc, "body");
        let p = first(&doc, "p");
        let before = doc.html();

        let stale = Deletion {
            parent: Some(body.id),
            child: p.id,
        };
        assert_eq!(apply_deletions(&doc, &[stale]), 0);
        assert_eq!(doc.html(), before);
        assert!(p.parent().is_some());
    }

    #[test]
    fn test_root_record_is_skipped() {
        let doc = Document::default();
        let deletions = collect_deletions(&doc, 0);
        assert_eq!(
            deletions,
            vec![Deletion {
                parent: None,
                child: doc.root().id
            }]
        );
        assert_eq!(apply_deletions(&doc, &deletions), 0);
    }
}
