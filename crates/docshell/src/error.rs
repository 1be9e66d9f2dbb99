//! CLI error types.

use docshell_config::ConfigError;
use docshell_shell::FrontMatterError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: {source}")]
    FrontMatter {
        path: String,
        source: FrontMatterError,
    },

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
