//! Core types for pondok payment detection
//!
//! This crate provides the domain types shared by all other crates:
//! - Tokens and keyword hits produced by the analysis pipeline
//! - Payment records, categories and amounts
//! - The detection vocabulary (keywords, stopwords, naming triggers)

pub mod payment;
pub mod token;
pub mod vocabulary;

pub use payment::{Amount, Category, PaymentRecord, TIMESTAMP_FORMAT, UNKNOWN};
pub use token::{KeywordHit, Token, TokenKind};
pub use vocabulary::Vocabulary;
