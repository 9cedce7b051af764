//! Flagged code block discovery.
//!
//! Walks a document's markup with byte offsets and collects every fenced
//! code block whose info string carries the trigger flag.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// One fenced code block eligible for the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedBlock {
    /// Byte range of the whole block in the document, fences included.
    pub range: Range<usize>,
    /// The full info string, flag included.
    pub info: String,
    /// The block body.
    pub code: String,
    /// 1-indexed line of the opening fence.
    pub line: usize,
}

/// Whether an info string carries the given flag as its own token.
pub fn has_flag(info: &str, flag: &str) -> bool {
    info.split_whitespace().any(|token| token == flag)
}

/// Remove the flag token from an info string.
pub fn strip_flag(info: &str, flag: &str) -> String {
    info.split_whitespace()
        .filter(|token| *token != flag)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect every flagged fenced code block, in document order.
pub fn find_blocks(source: &str, flag: &str) -> Vec<FlaggedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(Range<usize>, String, String)> = None;

    for (event, range) in Parser::new(source).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if has_flag(&info, flag) {
                    current = Some((range, info.to_string(), String::new()));
                }
            }
            Event::Text(text) => {
                if let Some((_, _, code)) = &mut current {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((range, info, code)) = current.take() {
                    let line = source[..range.start].matches('\n').count() + 1;
                    blocks.push(FlaggedBlock {
                        range,
                        info,
                        code,
                        line,
                    });
                }
            }
            _ => {}
        }
    }

    blocks
}
