//! CLI error types.

use polydoc_config::{LoadDataError, SettingsError};
use polydoc_site::ComposeError;
use polydoc_theme::ThemeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Data(#[from] LoadDataError),

    #[error("{0}")]
    Theme(#[from] ThemeError),

    #[error("{0}")]
    Compose(#[from] ComposeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] serde_json::Error),
}
