use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    #[error("chunk size must be a positive integer, got {0}")]
    InvalidChunkSize(i64),
}

pub type Result<T> = std::result::Result<T, SplitError>;
