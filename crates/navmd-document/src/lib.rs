//! Document pass deriving dynamic navigation samples.
//!
//! Finds every fenced code block flagged for the static-to-dynamic
//! transform, rewrites each one independently in parallel, and splices
//! the resulting tab groups back into the document. Block positions are
//! captured before any rewriting, so no unit ever observes a document
//! mutated by a sibling; a single barrier gathers every result before
//! the splice. One failing block fails the whole document, since a
//! broken sample must not ship.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use navmd_transform::{TransformError, transform};

pub mod blocks;
pub mod dual;

pub use blocks::{FlaggedBlock, find_blocks};
pub use dual::{DualViewOptions, compose_tabs};

/// Errors that abort a document pass.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("flagged code block at line {line} has no code")]
    EmptyBlock { line: usize },
    #[error("failed to transform code block at line {line}")]
    Transform {
        line: usize,
        #[source]
        source: TransformError,
    },
}

/// Rewrite every flagged code block in a document.
///
/// Returns the document unchanged when no block carries the flag.
pub fn process_document(source: &str, options: &DualViewOptions) -> Result<String, DocumentError> {
    let found = find_blocks(source, &options.flag);
    if found.is_empty() {
        return Ok(source.to_owned());
    }
    debug!(blocks = found.len(), "transforming flagged code blocks");

    let replacements: Vec<(std::ops::Range<usize>, String)> = found
        .par_iter()
        .map(|block| {
            if block.code.trim().is_empty() {
                return Err(DocumentError::EmptyBlock { line: block.line });
            }
            let derived = transform(&block.code).map_err(|source| DocumentError::Transform {
                line: block.line,
                source,
            })?;
            let tabs = compose_tabs(block, &derived.dynamic, options);
            Ok((block.range.clone(), tabs))
        })
        .collect::<Result<_, _>>()?;

    // splice forward over the original text; ranges are in document
    // order and never overlap
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (range, replacement) in replacements {
        out.push_str(&source[cursor..range.start]);
        out.push_str(&replacement);
        cursor = range.end;
        // the block range stops at the closing fence while the tab group
        // carries its own final newline, so skip the fence's line ending
        if source[cursor..].starts_with('\n') {
            cursor += 1;
        }
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}
