use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaydoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("reorder indexes out of bounds: {from} -> {to} (len {len})")]
    IndexOutOfBounds { from: usize, to: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DaydoError>;
