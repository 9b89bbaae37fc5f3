use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftcryptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open input file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create output file {}: {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Key must contain at least one byte")]
    EmptyKey,

    #[error("Invalid chunk size: {0}. Must be at least 1 byte")]
    InvalidChunkSize(usize),

    #[error("Operation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ShiftcryptError>;
