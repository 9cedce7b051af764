//! Comment re-injector.
//!
//! Restores tracked comments into the printed output by searching the
//! line array for each comment's anchor. This is deliberately text-based:
//! the printer rebuilds the tree from scratch and does not round-trip
//! configuration comments, so re-injection happens after the fact. A
//! comment whose anchor cannot be found is dropped, not an error.

use regex::Regex;
use tracing::debug;

use navmd_syntax::CommentKind;

use crate::comments::{Anchor, Position, TrackedComment};

/// Re-insert tracked comments into printed source text.
pub fn reinject(text: &str, comments: &[TrackedComment]) -> String {
    let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
    let trailing_newline = text.ends_with('\n');

    for comment in comments {
        match anchor_line(&lines, &comment.anchor) {
            Some(idx) => insert(&mut lines, idx, comment),
            None => debug!(text = %comment.text, "no anchor line found, dropping comment"),
        }
    }

    let mut out = lines.join("\n");
    if trailing_newline {
        out.push('\n');
    }
    out
}

/// Find the line a comment should attach to.
fn anchor_line(lines: &[String], anchor: &Anchor) -> Option<usize> {
    match anchor {
        Anchor::Screen(name) => find_containing(lines, &format!("name=\"{name}\"")),
        Anchor::Group(name) => find_containing(lines, &format!("key=\"{name}\"")),
        Anchor::Prop(prop) => find_matching(lines, 0, prop),
        Anchor::ScreenProp { screen, prop } => {
            // prefer the screen's own line, fall back to a global search
            let screen_at = find_containing(lines, &format!("name=\"{screen}\""));
            match screen_at {
                Some(idx) if prop_pattern(prop).is_some_and(|re| re.is_match(&lines[idx])) => {
                    Some(idx)
                }
                Some(idx) => find_matching(lines, idx, prop),
                None => find_matching(lines, 0, prop),
            }
        }
    }
}

fn find_containing(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}

fn find_matching(lines: &[String], from: usize, prop: &str) -> Option<usize> {
    let re = prop_pattern(prop)?;
    lines[from..]
        .iter()
        .position(|line| re.is_match(line))
        .map(|offset| from + offset)
}

/// A property anchor matches as an attribute (`prop=`) or object key
/// (`prop:`) on a word boundary.
fn prop_pattern(prop: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\s*[=:]", regex::escape(prop))).ok()
}

fn insert(lines: &mut Vec<String>, anchor: usize, comment: &TrackedComment) {
    let line = &lines[anchor];
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let in_markup = line.trim_start().starts_with('<');

    let rendered = if in_markup {
        format!("{indent}{{/* {} */}}", comment.text)
    } else {
        match comment.kind {
            CommentKind::Line => format!("{indent}// {}", comment.text),
            CommentKind::Block => format!("{indent}/* {} */", comment.text),
        }
    };

    match comment.position {
        Position::Leading => lines.insert(anchor, rendered),
        Position::Trailing => {
            // step past comments already injected below the anchor so
            // several trailing comments keep their recorded order
            let mut at = anchor + 1;
            while at < lines.len() && is_comment_line(&lines[at]) {
                at += 1;
            }
            lines.insert(at, rendered);
        }
    }
}

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("{/*") || trimmed.starts_with("/*")
}
