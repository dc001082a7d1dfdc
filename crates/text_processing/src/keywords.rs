//! Fuzzy payment keyword detection
//!
//! Every token of a message is compared against the keyword vocabulary.
//! Tokens close enough to a keyword (typos such as `sppp` or `sako`) produce
//! a [`KeywordHit`] at their position.

use pondok_core::{KeywordHit, Token};

use crate::normalizer::tokenize;
use crate::similarity::similarity_ratio;

/// Minimum similarity for a token to count as a keyword
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 =
    pondok_config::constants::extraction::SIMILARITY_THRESHOLD;

/// Keyword detector over a fixed, ordered vocabulary
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    /// Keywords in declared order; order decides ties
    keywords: Vec<String>,
    threshold: f64,
}

impl KeywordDetector {
    pub fn new(keywords: Vec<String>, threshold: f64) -> Self {
        Self {
            keywords,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Closest keyword for a single token, if it clears the threshold
    ///
    /// Keywords are scanned in declared order and the first maximum is kept,
    /// so equal scores resolve to the earlier keyword.
    pub fn best_match(&self, token: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;

        for keyword in &self.keywords {
            let score = similarity_ratio(keyword, token);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((keyword.as_str(), score)),
            }
        }

        best.filter(|&(_, score)| score >= self.threshold)
    }

    /// Detect keyword hits in cleaned, lowercased text
    ///
    /// Returns the hits in token order together with the token sequence
    /// their indices refer to.
    pub fn detect(&self, text: &str) -> (Vec<KeywordHit>, Vec<Token>) {
        let tokens = tokenize(text);

        let hits: Vec<KeywordHit> = tokens
            .iter()
            .enumerate()
            .filter_map(|(index, token)| {
                self.best_match(token.text())
                    .map(|(keyword, score)| KeywordHit::new(index, keyword, score))
            })
            .collect();

        for hit in &hits {
            tracing::debug!(
                index = hit.index,
                token = %tokens[hit.index],
                keyword = %hit.keyword,
                score = hit.score,
                "Payment keyword detected"
            );
        }

        (hits, tokens)
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new(
            pondok_core::vocabulary::DEFAULT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            DEFAULT_SIMILARITY_THRESHOLD,
        )
    }
}
