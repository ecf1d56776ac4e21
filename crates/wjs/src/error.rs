//! CLI error types.

use wjs_config::ConfigError;
use wjs_reconcile::ParamsError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("invalid parameter document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Reconcile(String),
}
