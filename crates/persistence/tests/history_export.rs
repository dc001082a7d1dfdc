//! Integration tests for history accumulation and spreadsheet export

use std::fs::File;

use chrono::NaiveDate;
use pondok_core::{Amount, PaymentRecord};
use pondok_persistence::{read_csv, write_csv, PaymentHistory, RecordEdit};

fn record(description: &str, amount: Amount) -> PaymentRecord {
    PaymentRecord {
        timestamp: NaiveDate::from_ymd_opt(2025, 4, 2)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap(),
        description: description.to_string(),
        amount,
        window_text: "uang saku untuk zahra 75000".to_string(),
    }
}

#[test]
fn test_export_file_restores_edited_history() {
    let mut history = PaymentHistory::new();
    history.append(vec![
        record("Uang Saku April - 2025 Zahra", Amount::Value(75)),
        record("SPP April - 2025 -", Amount::Unknown),
    ]);

    history
        .update(
            1,
            RecordEdit {
                description: Some("SPP April - 2025 Muhammad Rizki".to_string()),
                amount: Some(Amount::Value(300_000)),
            },
        )
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("riwayat.csv");
    write_csv(File::create(&path).unwrap(), &history).unwrap();

    let restored = PaymentHistory::from(read_csv(File::open(&path).unwrap()).unwrap());
    assert_eq!(restored, history);
    assert_eq!(
        restored.records()[1].description,
        "SPP April - 2025 Muhammad Rizki"
    );
    assert_eq!(restored.records()[1].amount, Amount::Value(300_000));
}
