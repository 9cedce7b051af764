//! Markdown file discovery.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::CliError;

/// Collect every markdown file under a directory, respecting ignore files.
///
/// Results are sorted so runs are deterministic regardless of walk order.
pub(crate) fn markdown_files(root: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !root.is_dir() {
        return Err(CliError::Validation(format!(
            "source directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "md" | "mdx"))
}
