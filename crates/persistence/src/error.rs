//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Record index {index} out of range (history has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected CSV header: expected {expected:?}, found {found:?}")]
    InvalidHeader {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
