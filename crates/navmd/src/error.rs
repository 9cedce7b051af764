//! CLI error types.

use std::path::PathBuf;

use navmd_config::ConfigError;
use navmd_document::DocumentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("{0}")]
    Walk(#[from] ignore::Error),

    #[error("{0}")]
    Validation(String),
}
