//! Integration tests for message analysis (normalize -> detect -> extract -> record)

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use pondok_core::{Amount, Category};
use pondok_text_processing::{analyze, PaymentAnalyzer};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, 3)
        .unwrap()
        .and_hms_opt(14, 5, 9)
        .unwrap()
}

#[test]
fn test_single_spp_payment() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let records = analyzer.analyze_at(
        "Assalamualaikum pak, mau bayar SPP atas nama Budi Santoso sebesar 150000 terima kasih",
        "Januari",
        fixed_now(),
    );

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.description, "SPP Januari - 2025 Budi Santoso");
    assert_eq!(record.amount, Amount::Value(150_000));
    assert_eq!(
        record.window_text,
        "assalamualaikum pak mau bayar spp atas nama budi santoso sebesar 150000"
    );
    assert_eq!(record.formatted_timestamp(), "2025-02-03 14:05:09");
}

#[test]
fn test_free_function_uses_current_year() {
    let records = analyze("bayar spp budi 150000", "Januari");

    assert_eq!(records.len(), 1);
    let year = records[0].timestamp.year();
    assert_eq!(records[0].description, format!("SPP Januari - {} Budi", year));
}

#[test]
fn test_same_message_twice_is_identical() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let message = "uang saku ananda fatimah 100.000 ya ustadz";

    let first = analyzer.analyze_at(message, "Maret", fixed_now());
    let second = analyzer.analyze_at(message, "Maret", fixed_now());
    assert_eq!(first, second);

    let live_a = analyzer.analyze(message, "Maret");
    let live_b = analyzer.analyze(message, "Maret");
    assert_eq!(live_a.len(), live_b.len());
    for (a, b) in live_a.iter().zip(&live_b) {
        assert_eq!(a.description, b.description);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.window_text, b.window_text);
    }
}

#[test]
fn test_one_record_per_keyword_hit() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let message = "spp budi 150000 dan uang saku siti 50000";

    let hits = analyzer.extract(message);
    let records = analyzer.analyze_at(message, "April", fixed_now());
    assert_eq!(hits.len(), 2);
    assert_eq!(records.len(), hits.len());

    assert_eq!(hits[0].category, Category::Spp);
    assert_eq!(hits[1].category, Category::UangSaku);
    assert_eq!(records[0].description, "SPP April - 2025 Budi");
    assert_eq!(records[1].description, "Uang Saku April - 2025 Siti");

    // The second window still starts at the first payment's amount
    assert_eq!(records[0].amount, Amount::Value(150_000));
    assert_eq!(records[1].amount, Amount::Value(150_000));
}

#[test]
fn test_nothing_detected() {
    let analyzer = PaymentAnalyzer::with_defaults();

    for message in ["", "   \n\t", "?!.,;:", "150000 250000", "terima kasih ustadz"] {
        assert!(
            analyzer.analyze_at(message, "Mei", fixed_now()).is_empty(),
            "unexpected record for {:?}",
            message
        );
    }
}

#[test]
fn test_typo_keyword_still_detected() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let records = analyzer.analyze_at("sppp bulan ini 200000", "Juni", fixed_now());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "SPP Juni - 2025 -");
    assert_eq!(records[0].amount, Amount::Value(200_000));
}

#[test]
fn test_amount_recorded_as_written() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let records = analyzer.analyze_at("bayar spp 50 ribu", "Juli", fixed_now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, Amount::Value(50));
}

#[test]
fn test_missing_amount_and_oversized_amount() {
    let analyzer = PaymentAnalyzer::with_defaults();

    let records = analyzer.analyze_at("spp ahmad", "Juli", fixed_now());
    assert_eq!(records[0].amount, Amount::Unknown);
    assert_eq!(records[0].amount.to_string(), "-");

    let digits = "99999999999999999999999";
    let records = analyzer.analyze_at(&format!("spp ahmad {}", digits), "Juli", fixed_now());
    assert_eq!(records[0].amount, Amount::Raw(digits.to_string()));
}

#[test]
fn test_name_found_after_second_trigger() {
    let records = PaymentAnalyzer::with_defaults().analyze_at(
        "bayar spp untuk ananda budi santoso bulan ini",
        "Agustus",
        fixed_now(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "SPP Agustus - 2025 Budi Santoso");
}

#[test]
fn test_multiline_chat_message() {
    let message = "Assalamualaikum ustadz\nIni uang saku untuk Zahra\nRp 75.000\nJazakallah";
    let records = PaymentAnalyzer::with_defaults().analyze_at(message, "September", fixed_now());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Uang Saku September - 2025 Zahra");
    assert_eq!(records[0].amount, Amount::Value(75_000));
}

#[test]
fn test_arbitrary_input_never_panics() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let long = "spp ".repeat(500);
    let inputs = [
        "🙏🙏🙏 spp",
        "ＳＰＰ ١٢٣",
        "spp\u{0}\u{7f}",
        "ÀÁÂ ÿ spp ÷ × 12",
        long.as_str(),
    ];

    for input in inputs {
        let hits = analyzer.extract(input);
        let records = analyzer.analyze_at(input, "Oktober", fixed_now());
        assert_eq!(hits.len(), records.len());
    }

    assert_eq!(analyzer.extract(&long).len(), 500);
}

#[test]
fn test_fullwidth_letters_and_non_ascii_digits_are_dropped() {
    let analyzer = PaymentAnalyzer::with_defaults();

    assert!(analyzer.extract("ＳＰＰ ١٢٣").is_empty());

    let extractions = analyzer.extract("spp ١٥٠٠٠٠ budi");
    assert_eq!(extractions.len(), 1);
    assert_eq!(extractions[0].window.text, "spp budi");
    assert_eq!(extractions[0].amount, Amount::Unknown);
    assert_eq!(extractions[0].name.as_deref(), Some("Budi"));
}

#[test]
fn test_latin1_letters_kept_and_math_signs_dropped() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let records = analyzer.analyze_at("ÀÁÂ ÿ spp ÷ × 12", "Oktober", fixed_now());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].window_text, "àáâ ÿ spp 12");
    assert_eq!(records[0].amount, Amount::Value(12));
    assert_eq!(records[0].description, "SPP Oktober - 2025 -");
}

#[test]
fn test_spo_after_trigger_is_a_name() {
    let analyzer = PaymentAnalyzer::with_defaults();
    let records = analyzer.analyze_at("sppu nama spo bulan bayar", "Januari", fixed_now());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "SPP Januari - 2025 Spo");
}
