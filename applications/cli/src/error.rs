/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] mixtape_core::MixtapeError),

    #[error(transparent)]
    Storage(#[from] mixtape_storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
