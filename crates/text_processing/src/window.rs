//! Token windows around keyword hits

use pondok_core::Token;
use serde::{Deserialize, Serialize};

pub use pondok_config::constants::extraction::{WINDOW_AFTER, WINDOW_BEFORE};

/// Contiguous slice of tokens surrounding a keyword hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// First token index (inclusive)
    pub start: usize,
    /// Last token index (exclusive)
    pub end: usize,
    pub tokens: Vec<Token>,
    /// Tokens joined by single spaces
    pub text: String,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Cut the window `[index - before, index + after)` out of `tokens`
///
/// Both bounds are clamped to the sequence. An index past the end yields an
/// empty window.
pub fn extract_window(tokens: &[Token], index: usize, before: usize, after: usize) -> Window {
    let end = index.saturating_add(after).min(tokens.len());
    let start = index.saturating_sub(before).min(end);

    let slice = &tokens[start..end];
    let text = slice
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ");

    Window {
        start,
        end,
        tokens: slice.to_vec(),
        text,
    }
}
