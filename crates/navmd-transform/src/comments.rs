//! Comment tracking across the transform.
//!
//! The printer rebuilds the tree from scratch, so comments attached to
//! configuration entries would be lost. During decomposition every comment
//! is recorded here together with an anchor, the most specific enclosing
//! name available, and re-inserted into the printed text afterwards (see
//! [`crate::reinject`]).

use navmd_syntax::{Comment, CommentKind};

/// The logical location a comment belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// A screen entry, identified by its screen name.
    Screen(String),
    /// A group entry, identified by its group name.
    Group(String),
    /// A navigator-level or group-level property.
    Prop(String),
    /// A property inside one screen's descriptor object.
    ScreenProp { screen: String, prop: String },
}

/// Whether the comment sat above its anchor or on the same line after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Leading,
    Trailing,
}

/// One comment captured during decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedComment {
    pub text: String,
    pub kind: CommentKind,
    pub anchor: Anchor,
    pub position: Position,
}

/// Collects [`TrackedComment`]s during decomposition, in source order.
#[derive(Debug, Default)]
pub struct CommentTracker {
    comments: Vec<TrackedComment>,
}

impl CommentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one comment at the given anchor.
    pub fn record(&mut self, comment: &Comment, anchor: Anchor, position: Position) {
        self.comments.push(TrackedComment {
            text: comment.text.clone(),
            kind: comment.kind,
            anchor,
            position,
        });
    }

    /// Record a batch of comments sharing an anchor and position.
    pub fn record_all(&mut self, comments: &[Comment], anchor: &Anchor, position: Position) {
        for comment in comments {
            self.record(comment, anchor.clone(), position);
        }
    }

    /// All comments captured so far.
    pub fn comments(&self) -> &[TrackedComment] {
        &self.comments
    }

    /// Number of comments captured so far.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// Whether a comment marks the end of an annotation region.
///
/// Annotation pairs like `highlight-start` / `highlight-end` are attached
/// with a leading bias by the parser, so an `*-end` marker ends up leading
/// the *next* entry. Matched on raw text; a comment that merely ends in
/// `-end` will also match, which mirrors the established behavior.
pub fn is_region_end(comment: &Comment) -> bool {
    comment.text.trim().ends_with("-end")
}
