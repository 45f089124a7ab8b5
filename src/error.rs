use crate::domain::{MetricsError, SeatsError};
use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Seats error: {0}")]
    Seats(#[from] SeatsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<Error>) -> Self {
        Self::Load {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
