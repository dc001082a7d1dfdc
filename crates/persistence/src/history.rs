//! Payment history
//!
//! The history is an owned, ordered list of records. Analysis results only
//! ever enter it through [`PaymentHistory::append`]; afterwards a record may
//! be corrected by hand (typically the student name inside the description)
//! or removed.

use pondok_core::{Amount, PaymentRecord};
use serde::{Deserialize, Serialize};

use crate::PersistenceError;

/// Manual correction of a stored record
///
/// Fields left as `None` are kept unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordEdit {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
}

impl RecordEdit {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none()
    }
}

/// Accumulated payment records, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistory {
    records: Vec<PaymentRecord>,
}

impl PaymentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of one analysis, returning how many were added
    pub fn append<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = PaymentRecord>,
    {
        let before = self.records.len();
        self.records.extend(records);
        let added = self.records.len() - before;

        if added > 0 {
            tracing::info!(added, total = self.records.len(), "Payments added to history");
        }
        added
    }

    pub fn records(&self) -> &[PaymentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply a manual edit to the record at `index`
    pub fn update(
        &mut self,
        index: usize,
        edit: RecordEdit,
    ) -> Result<&PaymentRecord, PersistenceError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(PersistenceError::IndexOutOfRange { index, len })?;

        if let Some(description) = edit.description {
            record.description = description;
        }
        if let Some(amount) = edit.amount {
            record.amount = amount;
        }

        tracing::info!(index, "History record edited");
        Ok(record)
    }

    /// Remove and return the record at `index`
    pub fn remove(&mut self, index: usize) -> Result<PaymentRecord, PersistenceError> {
        let len = self.records.len();
        if index >= len {
            return Err(PersistenceError::IndexOutOfRange { index, len });
        }

        let record = self.records.remove(index);
        tracing::info!(index, remaining = self.records.len(), "History record removed");
        Ok(record)
    }

    /// Drop every record, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        tracing::info!(removed, "History cleared");
        removed
    }
}

impl From<Vec<PaymentRecord>> for PaymentHistory {
    fn from(records: Vec<PaymentRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a PaymentHistory {
    type Item = &'a PaymentRecord;
    type IntoIter = std::slice::Iter<'a, PaymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(description: &str, amount: Amount) -> PaymentRecord {
        PaymentRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 10)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            description: description.to_string(),
            amount,
            window_text: "bayar spp".to_string(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = PaymentHistory::new();
        assert!(history.is_empty());

        let added = history.append(vec![
            record("SPP Januari - 2025 Budi", Amount::Value(150_000)),
            record("Uang Saku Januari - 2025 Siti", Amount::Value(50_000)),
        ]);
        assert_eq!(added, 2);

        history.append(vec![record("SPP Februari - 2025 -", Amount::Unknown)]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.records()[0].description, "SPP Januari - 2025 Budi");
        assert_eq!(history.records()[2].description, "SPP Februari - 2025 -");
    }

    #[test]
    fn test_append_nothing() {
        let mut history = PaymentHistory::new();
        assert_eq!(history.append(Vec::new()), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_update_description_only() {
        let mut history = PaymentHistory::from(vec![record("SPP Januari - 2025 -", Amount::Value(1))]);

        let edit = RecordEdit {
            description: Some("SPP Januari - 2025 Ahmad Fauzi".to_string()),
            amount: None,
        };
        let updated = history.update(0, edit).unwrap();

        assert_eq!(updated.description, "SPP Januari - 2025 Ahmad Fauzi");
        assert_eq!(updated.amount, Amount::Value(1));
    }

    #[test]
    fn test_update_amount() {
        let mut history = PaymentHistory::from(vec![record("SPP Januari - 2025 Budi", Amount::Value(50))]);

        let edit = RecordEdit {
            amount: Some(Amount::Value(50_000)),
            ..Default::default()
        };
        history.update(0, edit).unwrap();
        assert_eq!(history.records()[0].amount, Amount::Value(50_000));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut history = PaymentHistory::new();
        let result = history.update(3, RecordEdit::default());
        assert!(matches!(
            result,
            Err(PersistenceError::IndexOutOfRange { index: 3, len: 0 })
        ));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = PaymentHistory::from(vec![
            record("a", Amount::Unknown),
            record("b", Amount::Unknown),
            record("c", Amount::Unknown),
        ]);

        let removed = history.remove(1).unwrap();
        assert_eq!(removed.description, "b");
        let remaining: Vec<&str> = history.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);

        assert!(history.remove(5).is_err());
        assert_eq!(history.clear(), 2);
        assert!(history.is_empty());
    }

    #[test]
    fn test_edit_from_json() {
        let edit: RecordEdit = serde_json::from_str(r#"{"amount": 75000}"#).unwrap();
        assert_eq!(edit.amount, Some(Amount::Value(75_000)));
        assert!(edit.description.is_none());

        let edit: RecordEdit = serde_json::from_str("{}").unwrap();
        assert!(edit.is_empty());
    }
}
