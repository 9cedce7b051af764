//! Dual-view composer.
//!
//! Packages the original static sample and the derived dynamic sample as
//! a two-tab directive group. Both panels keep the block's metadata with
//! the trigger flag removed, so neither panel re-triggers the transform.

use crate::blocks::{FlaggedBlock, strip_flag};

/// Labels and trigger flag for composed tab groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualViewOptions {
    pub flag: String,
    pub static_label: String,
    pub dynamic_label: String,
}

impl Default for DualViewOptions {
    fn default() -> Self {
        Self {
            flag: "static-dynamic".to_owned(),
            static_label: "Static".to_owned(),
            dynamic_label: "Dynamic".to_owned(),
        }
    }
}

/// Compose the two-panel tab group for one transformed block.
///
/// The static panel comes first and is the default selection.
pub fn compose_tabs(block: &FlaggedBlock, dynamic: &str, options: &DualViewOptions) -> String {
    let info = strip_flag(&block.info, &options.flag);
    let fence = fence_for(&block.code, dynamic);

    let mut out = String::with_capacity(block.code.len() + dynamic.len() + 128);
    out.push_str("::: tabs\n");
    push_panel(&mut out, &options.static_label, &fence, &info, &block.code);
    push_panel(&mut out, &options.dynamic_label, &fence, &info, dynamic);
    out.push_str(":::\n");
    out
}

fn push_panel(out: &mut String, label: &str, fence: &str, info: &str, code: &str) {
    out.push_str("::: tab ");
    out.push_str(label);
    out.push('\n');
    out.push_str(fence);
    if !info.is_empty() {
        out.push_str(info);
    }
    out.push('\n');
    out.push_str(code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(fence);
    out.push('\n');
}

/// Pick a fence longer than any backtick run in either panel.
fn fence_for(static_code: &str, dynamic_code: &str) -> String {
    let longest = longest_backtick_run(static_code).max(longest_backtick_run(dynamic_code));
    "`".repeat(longest.max(2) + 1)
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}
