//! Token and keyword-hit types produced by the analysis pipeline

use serde::{Deserialize, Serialize};

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Maximal run of letters (ASCII or Latin-1 accented)
    Word,
    /// Maximal run of ASCII digits
    Number,
}

/// A single word or number unit of normalized text
///
/// Position is implicit: a token's index in the sequence it was produced in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    /// Create a word token
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
        }
    }

    /// Create a number token
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Number,
        }
    }

    /// Token text as it appeared in the normalized input
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// True for word tokens
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Number of characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A token that fuzzy-matched a payment keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// Index into the token sequence the hit was detected in
    pub index: usize,
    /// Vocabulary keyword the token matched
    pub keyword: String,
    /// Similarity ratio in [0, 1]
    pub score: f64,
}

impl KeywordHit {
    pub fn new(index: usize, keyword: impl Into<String>, score: f64) -> Self {
        Self {
            index,
            keyword: keyword.into(),
            score,
        }
    }
}
