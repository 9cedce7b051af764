//! `navmd transform` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use navmd_config::{CliSettings, Config};
use navmd_document::process_document;

use super::dual_options;
use crate::error::CliError;

/// Arguments for the transform command.
#[derive(Args)]
pub(crate) struct TransformArgs {
    /// Markdown document to rewrite.
    file: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover navmd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Info-string token that triggers the transform (overrides config).
    #[arg(long)]
    flag: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl TransformArgs {
    /// Execute the transform command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, a flagged sample
    /// fails to transform, or the result cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: None,
            output_dir: None,
            flag: self.flag,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = dual_options(&config.transform);

        let content = std::fs::read_to_string(&self.file)?;
        let processed =
            process_document(&content, &options).map_err(|source| CliError::Document {
                path: self.file.clone(),
                source,
            })?;

        match self.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, processed)?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(processed.as_bytes())?;
            }
        }
        Ok(())
    }
}
