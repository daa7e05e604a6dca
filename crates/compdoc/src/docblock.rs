//! Leading JSDoc comment lookup.

use oxc_ast::ast::{Comment, CommentContent};
use oxc_span::Span;
use rustc_hash::FxHashMap;

/// Index of JSDoc comments by the node they document.
///
/// Leading comments are keyed by the start offset of the token they are
/// attached to. A `/** */` block opened on the same line as the previous
/// token (`setup: { /**`) is a trailing comment to the parser; it documents the
/// node that follows it when only whitespace separates the two.
#[derive(Debug)]
pub struct Docblocks<'a> {
    source: &'a str,
    by_node: FxHashMap<u32, Span>,
    trailing: Vec<Comment>,
}

impl<'a> Docblocks<'a> {
    /// Build the index from a parsed program's comments.
    pub fn new<'c, I>(source: &'a str, comments: I) -> Self
    where
        I: IntoIterator<Item = &'c Comment>,
    {
        let mut by_node = FxHashMap::default();
        let mut trailing = Vec::new();
        for comment in comments {
            if !matches!(
                comment.content,
                CommentContent::Jsdoc | CommentContent::JsdocLegal
            ) {
                continue;
            }
            if comment.is_leading() {
                // comments arrive in source order, so the nearest one is kept
                by_node.insert(comment.attached_to, comment.content_span());
            } else {
                trailing.push(*comment);
            }
        }
        Self {
            source,
            by_node,
            trailing,
        }
    }

    /// The raw body of the docblock documenting a node starting at `span.start`.
    pub fn docblock(&self, span: Span) -> Option<&'a str> {
        let content = self
            .by_node
            .get(&span.start)
            .copied()
            .or_else(|| self.trailing_before(span.start))?;
        self.source.get(content.start as usize..content.end as usize)
    }

    /// Last trailing JSDoc comment ending right before `start`, whitespace aside.
    fn trailing_before(&self, start: u32) -> Option<Span> {
        let index = self
            .trailing
            .partition_point(|comment| comment.span.end <= start);
        let comment = self.trailing.get(index.checked_sub(1)?)?;
        let gap = self
            .source
            .get(comment.span.end as usize..start as usize)?;
        gap.trim().is_empty().then(|| comment.content_span())
    }
}
