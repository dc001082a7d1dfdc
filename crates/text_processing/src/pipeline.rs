//! Payment analysis pipeline
//!
//! Order: normalize → detect keywords → per hit: window, category, name,
//! amount → record. One record is produced for every keyword hit, even when
//! name or amount could not be found.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use pondok_config::{resolve_vocabulary, ExtractionConfig};
use pondok_core::{Amount, Category, KeywordHit, PaymentRecord, Vocabulary, UNKNOWN};
use serde::{Deserialize, Serialize};

use crate::amount::extract_amount;
use crate::keywords::KeywordDetector;
use crate::name::NameExtractor;
use crate::normalizer::normalize;
use crate::window::{extract_window, Window};
use crate::{Result, TextProcessingError};

/// Everything extracted for one keyword hit, before month and clock are applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentExtraction {
    pub hit: KeywordHit,
    pub category: Category,
    /// Student name, `None` when no heuristic found one
    pub name: Option<String>,
    pub amount: Amount,
    pub window: Window,
}

impl PaymentExtraction {
    /// `"{category} {month} - {year} {name}"`, trimmed
    pub fn description(&self, month_label: &str, year: i32) -> String {
        format!(
            "{} {} - {} {}",
            self.category,
            month_label,
            year,
            self.name.as_deref().unwrap_or(UNKNOWN)
        )
        .trim()
        .to_string()
    }

    /// Assemble the history record stamped at `now`
    pub fn into_record(self, month_label: &str, now: NaiveDateTime) -> PaymentRecord {
        let description = self.description(month_label, now.year());
        PaymentRecord {
            timestamp: now,
            description,
            amount: self.amount,
            window_text: self.window.text,
        }
    }
}

/// Detects payments in parent messages and turns them into records
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PaymentAnalyzer {
    detector: KeywordDetector,
    names: NameExtractor,
    spp_markers: Vec<String>,
    window_before: usize,
    window_after: usize,
}

impl PaymentAnalyzer {
    /// Create an analyzer from a vocabulary and extraction settings
    pub fn new(vocabulary: Vocabulary, config: &ExtractionConfig) -> Result<Self> {
        let vocabulary = vocabulary.normalized();

        if vocabulary.keywords.is_empty() {
            return Err(TextProcessingError::EmptyKeywords);
        }

        let threshold = config.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TextProcessingError::InvalidThreshold(threshold));
        }

        if config.window_after == 0 {
            return Err(TextProcessingError::InvalidWindow(
                "window_after must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            detector: KeywordDetector::new(vocabulary.keywords.clone(), threshold),
            names: NameExtractor::new(&vocabulary),
            spp_markers: vocabulary.spp_markers,
            window_before: config.window_before,
            window_after: config.window_after,
        })
    }

    /// Create an analyzer from settings, loading the configured vocabulary file
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::new(resolve_vocabulary(config), config)
    }

    /// Analyzer with the built-in vocabulary and default tuning
    pub fn with_defaults() -> Self {
        Self {
            detector: KeywordDetector::default(),
            names: NameExtractor::default(),
            spp_markers: Vocabulary::default().spp_markers,
            window_before: ExtractionConfig::default().window_before,
            window_after: ExtractionConfig::default().window_after,
        }
    }

    pub fn detector(&self) -> &KeywordDetector {
        &self.detector
    }

    /// SPP when the matched keyword contains an SPP marker, otherwise pocket money
    pub fn classify(&self, keyword: &str) -> Category {
        if self.spp_markers.iter().any(|m| keyword.contains(m.as_str())) {
            Category::Spp
        } else {
            Category::UangSaku
        }
    }

    /// Run detection and extraction without assembling records
    pub fn extract(&self, message: &str) -> Vec<PaymentExtraction> {
        let cleaned = normalize(message).to_lowercase();
        let (hits, tokens) = self.detector.detect(&cleaned);

        hits.into_iter()
            .map(|hit| {
                let window =
                    extract_window(&tokens, hit.index, self.window_before, self.window_after);
                let category = self.classify(&hit.keyword);
                let name = self.names.extract(&tokens, hit.index);
                let amount = extract_amount(&window.text);

                tracing::debug!(
                    index = hit.index,
                    category = %category,
                    name = name.as_deref().unwrap_or(UNKNOWN),
                    amount = %amount,
                    "Payment extracted"
                );

                PaymentExtraction {
                    hit,
                    category,
                    name,
                    amount,
                    window,
                }
            })
            .collect()
    }

    /// Analyze a message, stamping records with the local clock
    pub fn analyze(&self, message: &str, month_label: &str) -> Vec<PaymentRecord> {
        self.analyze_at(message, month_label, Local::now().naive_local())
    }

    /// Analyze a message, stamping records with `now` (truncated to seconds)
    pub fn analyze_at(
        &self,
        message: &str,
        month_label: &str,
        now: NaiveDateTime,
    ) -> Vec<PaymentRecord> {
        let now = now.with_nanosecond(0).unwrap_or(now);

        self.extract(message)
            .into_iter()
            .map(|extraction| extraction.into_record(month_label, now))
            .collect()
    }
}

impl Default for PaymentAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static DEFAULT_ANALYZER: Lazy<PaymentAnalyzer> = Lazy::new(PaymentAnalyzer::with_defaults);

/// Analyze a message with the built-in vocabulary
///
/// # Examples
/// ```
/// use pondok_core::Amount;
///
/// let records = pondok_text_processing::analyze("bayar spp budi 150000", "Januari");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].amount, Amount::Value(150000));
/// ```
pub fn analyze(message: &str, month_label: &str) -> Vec<PaymentRecord> {
    DEFAULT_ANALYZER.analyze(message, month_label)
}
