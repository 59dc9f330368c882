//! Error types for the replay tool.

use trading_indexer::error::IndexerError;

use crate::config::ConfigError;

/// Main error type for the replay tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),

    #[error("Failed to read logs: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid logs JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
