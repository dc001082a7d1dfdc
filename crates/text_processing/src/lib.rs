//! Payment detection for informal parent messages
//!
//! This crate turns free-form chat text into payment records:
//! - **Normalization**: strip punctuation and line breaks, split into tokens
//! - **Keyword Detection**: fuzzy-match tokens against payment keywords (`spp`, `uang saku`, ...)
//! - **Window Extraction**: take the tokens around every hit
//! - **Name & Amount**: heuristics for the student name and the nominal
//! - **Record Assembly**: category, description and timestamp per hit
//!
//! # Example
//!
//! ```
//! use pondok_text_processing::PaymentAnalyzer;
//!
//! let analyzer = PaymentAnalyzer::with_defaults();
//! let records = analyzer.analyze(
//!     "Assalamualaikum pak, mau bayar SPP atas nama Budi Santoso sebesar 150000",
//!     "Januari",
//! );
//!
//! assert_eq!(records.len(), 1);
//! assert!(records[0].description.starts_with("SPP Januari - "));
//! assert!(records[0].description.ends_with("Budi Santoso"));
//! ```

pub mod amount;
pub mod keywords;
pub mod name;
pub mod normalizer;
pub mod similarity;
pub mod window;

mod error;
mod pipeline;

pub use error::{Result, TextProcessingError};
pub use pipeline::{analyze, PaymentAnalyzer, PaymentExtraction};

pub use amount::extract_amount;
pub use keywords::{KeywordDetector, DEFAULT_SIMILARITY_THRESHOLD};
pub use name::NameExtractor;
pub use normalizer::{normalize, tokenize};
pub use similarity::similarity_ratio;
pub use window::{extract_window, Window};
