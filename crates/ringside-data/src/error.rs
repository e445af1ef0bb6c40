use thiserror::Error;
pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Dataset metadata declares {expected} venues but {found} were found")]
    CountMismatch { expected: usize, found: usize },
    #[error("Dataset file not found: {0}")]
    DatasetNotFound(String),
}
