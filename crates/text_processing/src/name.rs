//! Student name heuristics
//!
//! Parents rarely write names in a fixed place. Three probes are tried in
//! order around a keyword hit and the first one that finds a name wins:
//!
//! 1. words directly after the keyword (`spp budi santoso`)
//! 2. words after a naming trigger near the keyword (`a.n budi`, `untuk ananda budi`)
//! 3. the first name-like words a few positions after the keyword
//!
//! A name word is alphabetic, longer than one letter and not a stopword.

use std::collections::HashSet;

use pondok_core::{Token, Vocabulary};

/// How far before the keyword the trigger scan starts
const TRIGGER_SCAN_BEFORE: usize = 5;
/// Trigger scan end offset after the keyword (exclusive)
const TRIGGER_SCAN_AFTER: usize = 10;
/// Forward fallback end offset after the keyword (exclusive)
const FORWARD_SCAN_AFTER: usize = 6;

/// Words collected right after the keyword
const FOLLOWING_MAX_WORDS: usize = 2;
/// Words collected after a naming trigger
const TRIGGER_MAX_WORDS: usize = 3;
/// Words collected by the forward fallback
const FORWARD_MAX_WORDS: usize = 2;

#[derive(Debug, Clone)]
pub struct NameExtractor {
    stopwords: HashSet<String>,
    triggers: HashSet<String>,
}

impl NameExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            stopwords: vocabulary.stopwords.iter().cloned().collect(),
            triggers: vocabulary.triggers.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Name for the keyword at `hit`, or `None` when no probe finds one
    pub fn extract(&self, tokens: &[Token], hit: usize) -> Option<String> {
        self.following_sequence(tokens, hit)
            .or_else(|| self.trigger_scan(tokens, hit))
            .or_else(|| self.forward_scan(tokens, hit))
    }

    fn following_sequence(&self, tokens: &[Token], hit: usize) -> Option<String> {
        self.name_sequence(tokens, hit + 1, FOLLOWING_MAX_WORDS)
    }

    /// Later triggers are still tried when an earlier one is not followed by a name
    fn trigger_scan(&self, tokens: &[Token], hit: usize) -> Option<String> {
        let start = hit.saturating_sub(TRIGGER_SCAN_BEFORE);
        let end = (hit + TRIGGER_SCAN_AFTER).min(tokens.len());

        (start..end)
            .filter(|&j| self.is_trigger(&tokens[j]))
            .find_map(|j| self.name_sequence(tokens, j + 1, TRIGGER_MAX_WORDS))
    }

    fn forward_scan(&self, tokens: &[Token], hit: usize) -> Option<String> {
        let end = (hit + FORWARD_SCAN_AFTER).min(tokens.len());

        (hit + 1..end).find_map(|j| self.name_sequence(tokens, j, FORWARD_MAX_WORDS))
    }

    /// Up to `max_words` consecutive name tokens starting exactly at `start`
    fn name_sequence(&self, tokens: &[Token], start: usize, max_words: usize) -> Option<String> {
        let words: Vec<String> = tokens
            .iter()
            .skip(start)
            .take(max_words)
            .take_while(|token| self.is_name_token(token))
            .map(|token| capitalize(token.text()))
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    fn is_name_token(&self, token: &Token) -> bool {
        token.is_word()
            && token.char_len() > 1
            && !self.stopwords.contains(&token.text().to_lowercase())
    }

    fn is_trigger(&self, token: &Token) -> bool {
        self.triggers.contains(&token.text().to_lowercase())
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

/// First character in title case, the rest lower case
///
/// Only the first character of an expanded uppercase form stays upper
/// (`ß` becomes `Ss`).
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    upper
        .next()
        .into_iter()
        .chain(upper.flat_map(char::to_lowercase))
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}
