use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("history capacity must be at least 1")]
    InvalidCapacity,
    #[error("row has {found} cells but the header has {expected} columns")]
    RowShape { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
