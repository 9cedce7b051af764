//! `navmd check` command implementation.

use std::path::PathBuf;

use clap::Args;
use navmd_config::{CliSettings, Config};
use navmd_document::{find_blocks, process_document};
use tracing::info;

use super::{dual_options, walk::markdown_files};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover navmd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Info-string token that triggers the transform (overrides config).
    #[arg(long)]
    flag: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command. Writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error on the first document whose flagged samples fail
    /// to transform.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: None,
            flag: self.flag,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = dual_options(&config.transform);

        let files = markdown_files(&config.docs_resolved.source_dir)?;
        let mut blocks = 0usize;
        for path in &files {
            let content = std::fs::read_to_string(path)?;
            blocks += find_blocks(&content, &options.flag).len();
            process_document(&content, &options).map_err(|source| CliError::Document {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "checked");
        }

        output.success(&format!(
            "Checked {} documents, {} flagged samples transform cleanly",
            files.len(),
            blocks
        ));
        Ok(())
    }
}
