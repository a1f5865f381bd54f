//! CLI error types.

use titan_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid AI copy file: {0}")]
    AiCopy(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
