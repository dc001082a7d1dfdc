//! Error types for the payment analysis pipeline

use thiserror::Error;

/// Errors raised while building a [`PaymentAnalyzer`](crate::PaymentAnalyzer)
///
/// Analysis itself never fails; unusable input yields no records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextProcessingError {
    #[error("Keyword vocabulary is empty")]
    EmptyKeywords,

    #[error("Similarity threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
