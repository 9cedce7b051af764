//! `navmd build` command implementation.

use std::path::PathBuf;

use clap::Args;
use navmd_config::{CliSettings, Config};
use navmd_document::process_document;
use tracing::info;

use super::{dual_options, walk::markdown_files};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover navmd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Info-string token that triggers the transform (overrides config).
    #[arg(long)]
    flag: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a document cannot be read
    /// or written, or a flagged sample fails to transform.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            flag: self.flag,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = dual_options(&config.transform);

        let source_dir = &config.docs_resolved.source_dir;
        let output_dir = &config.docs_resolved.output_dir;
        output.info(&format!("Source directory: {}", source_dir.display()));
        output.info(&format!("Output directory: {}", output_dir.display()));

        let files = markdown_files(source_dir)?;
        let mut rewritten = 0usize;
        for path in &files {
            let content = std::fs::read_to_string(path)?;
            let processed =
                process_document(&content, &options).map_err(|source| CliError::Document {
                    path: path.clone(),
                    source,
                })?;
            if processed != content {
                rewritten += 1;
                info!(path = %path.display(), "rewrote flagged samples");
            }

            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let destination = output_dir.join(relative);
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&destination, processed)?;
        }

        output.success(&format!(
            "Built {} documents ({} with derived samples)",
            files.len(),
            rewritten
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mirrors_tree_and_rewrites_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(docs.join("guide")).unwrap();
        std::fs::write(docs.join("plain.md"), "# Plain\n\nNo samples here.\n").unwrap();
        std::fs::write(
            docs.join("guide/nav.md"),
            "```js static-dynamic\nconst RootStack = createStackNavigator({\n  screens: {\n    Home: HomeScreen,\n  },\n});\n```\n",
        )
        .unwrap();
        let config_path = dir.path().join("navmd.toml");
        std::fs::write(&config_path, "[docs]\nsource_dir = \"docs\"\n").unwrap();

        let args = BuildArgs {
            config: Some(config_path),
            source_dir: None,
            output_dir: None,
            flag: None,
            verbose: false,
        };
        args.execute().unwrap();

        let plain = std::fs::read_to_string(dir.path().join("build/plain.md")).unwrap();
        assert_eq!(plain, "# Plain\n\nNo samples here.\n");
        let nav = std::fs::read_to_string(dir.path().join("build/guide/nav.md")).unwrap();
        assert!(nav.contains("::: tab Dynamic"));
        assert!(nav.contains("const Stack = createStackNavigator();"));
    }

    #[test]
    fn test_build_fails_on_broken_sample() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(
            docs.join("broken.md"),
            "```js static-dynamic\nconst x = 'oops\n```\n",
        )
        .unwrap();
        let config_path = dir.path().join("navmd.toml");
        std::fs::write(&config_path, "").unwrap();

        let args = BuildArgs {
            config: Some(config_path),
            source_dir: None,
            output_dir: None,
            flag: None,
            verbose: false,
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(err, CliError::Document { .. }));
    }
}
