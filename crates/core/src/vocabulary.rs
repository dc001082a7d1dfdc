//! Fixed vocabulary for payment detection
//!
//! Default word lists cover the informal Indonesian used by parents writing to
//! the boarding-house administrator. A deployment can replace any list from a
//! YAML file (see `pondok-config`); missing lists fall back to these defaults.

use serde::{Deserialize, Serialize};

/// Payment keywords in match-priority order.
///
/// Order matters: on equal similarity the first keyword wins.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "spp", "spb", "sppu", "sppp", "uang saku", "uang sako", "uang spp", "saku", "sako",
];

/// Substrings marking a keyword as tuition (SPP); everything else is pocket money
pub const DEFAULT_SPP_MARKERS: &[&str] = &["spp", "spb", "sppu", "sppp"];

/// Filler words and month names that can never be part of a name
///
/// Tokens are compared in lowercase and entries are kept as written, so an
/// entry with capitals (`"SPO"`) never excludes anything.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "bulan", "ini", "juga", "ya", "assalamualaikum", "ustadz", "pak", "ibu", "saya",
    "untuk", "atas", "nama", "anak", "santri", "bayar", "pembayaran", "rp", "ribu", "rb",
    "sebesar", "berapa", "dengan", "yg", "telah", "sudah", "kpd", "ke", "di", "dan",
    "jadi", "pakai", "uang", "sako", "saku", "SPO", "uang saki", "ananda",
    "januari", "februari", "maret", "april", "mei", "juni", "juli", "agustus",
    "september", "oktober", "november", "desember",
];

/// Attribution markers ("on behalf of", "for", "name", "student") that
/// usually precede the payer's or student's name
pub const DEFAULT_TRIGGERS: &[&str] = &[
    "an", "an.", "a.n", "a/n", "atas", "atasnama", "atas_nama", "ananda", "untuk", "nama",
    "santri", "santriwati",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_keywords() -> Vec<String> {
    owned(DEFAULT_KEYWORDS)
}

fn default_spp_markers() -> Vec<String> {
    owned(DEFAULT_SPP_MARKERS)
}

fn default_stopwords() -> Vec<String> {
    owned(DEFAULT_STOPWORDS)
}

fn default_triggers() -> Vec<String> {
    owned(DEFAULT_TRIGGERS)
}

/// Word lists driving keyword detection, category classification and name extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Payment keywords, in tie-break order
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Keyword substrings classifying a hit as SPP
    #[serde(default = "default_spp_markers")]
    pub spp_markers: Vec<String>,
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    /// Naming trigger words
    #[serde(default = "default_triggers")]
    pub triggers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            spp_markers: default_spp_markers(),
            stopwords: default_stopwords(),
            triggers: default_triggers(),
        }
    }
}

impl Vocabulary {
    /// Copy with every entry trimmed, blanks dropped.
    ///
    /// Keywords, markers and triggers are lowercased to match the lowercased
    /// tokens. Stopwords keep their case. Keyword order is kept.
    pub fn normalized(&self) -> Self {
        fn clean(words: &[String], lowercase: bool) -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(|w| if lowercase { w.to_lowercase() } else { w.to_string() })
                .collect()
        }

        Self {
            keywords: clean(&self.keywords, true),
            spp_markers: clean(&self.spp_markers, true),
            stopwords: clean(&self.stopwords, false),
            triggers: clean(&self.triggers, true),
        }
    }
}
