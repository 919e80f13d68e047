//! CLI error types.

use tw_config::ConfigError;
use tw_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Toml(#[from] toml::ser::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("{0} broken link(s) found")]
    BrokenLinks(usize),
}
