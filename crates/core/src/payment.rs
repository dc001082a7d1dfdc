//! Payment record types
//!
//! A [`PaymentRecord`] is the output unit of the analysis pipeline: one per
//! detected payment keyword, even when name and amount could not be resolved.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Marker for an unresolved extraction (name or amount)
pub const UNKNOWN: &str = "-";

/// Timestamp layout used for records and exports (second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Payment category derived from the matched keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Monthly tuition (Sumbangan Pembinaan Pendidikan)
    Spp,
    /// Pocket money held by the boarding house
    UangSaku,
}

impl Category {
    /// Label used inside record descriptions
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Spp => "SPP",
            Category::UangSaku => "Uang Saku",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Extracted payment amount
///
/// `Raw` only appears when a digit run was found but could not be converted
/// to an integer (e.g. it overflows `u64`); it is kept tagged so it is never
/// mistaken for a valid number downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Amount {
    Value(u64),
    Raw(String),
    #[default]
    Unknown,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(v) => write!(f, "{}", v),
            Amount::Raw(raw) => f.write_str(raw),
            Amount::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    /// Parse a rendered amount back (export cells, manual edits)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == UNKNOWN {
            return Ok(Amount::Unknown);
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(v) => Amount::Value(v),
            Err(_) => Amount::Raw(trimmed.to_string()),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Value(v) => serializer.serialize_u64(*v),
            Amount::Raw(raw) => serializer.serialize_str(raw),
            Amount::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Amount::Value(v),
            Repr::Text(text) => text.parse().unwrap_or_default(),
        })
    }
}

/// One detected payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Detection time (local, second precision)
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    /// "{category} {month} - {year} {name}"
    pub description: String,
    pub amount: Amount,
    /// Token window the record was extracted from (audit trail)
    pub window_text: String,
}

impl PaymentRecord {
    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Serde adapter for [`TIMESTAMP_FORMAT`] timestamps
pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
