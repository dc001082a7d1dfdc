//! Nominal amount extraction from window text

use once_cell::sync::Lazy;
use pondok_core::Amount;
use regex::Regex;

/// Leftmost ASCII digit run, optionally followed by a thousands marker
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]{3,}|[0-9]+)\s*(ribu|rb|k)?").unwrap());

/// Extract the payment amount from a window's text
///
/// Thousands separators (`.` and `,`) are removed first, so `1.500.000`
/// reads as one number. The first digit run wins regardless of length.
///
/// NOTE: the `ribu`/`rb`/`k` marker is matched but not applied; "50 ribu"
/// yields `50`, not `50000`. Amounts are recorded as written.
pub fn extract_amount(window_text: &str) -> Amount {
    let cleaned = window_text.replace(['.', ','], "");

    let Some(captures) = AMOUNT_PATTERN.captures(&cleaned) else {
        return Amount::Unknown;
    };
    let digits = &captures[1];

    match digits.parse::<u64>() {
        Ok(value) => Amount::Value(value),
        Err(e) => {
            tracing::debug!(digits, error = %e, "Amount kept as raw text");
            Amount::Raw(digits.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amount() {
        assert_eq!(extract_amount("bayar spp 150000 budi"), Amount::Value(150_000));
    }

    #[test]
    fn test_separators_removed() {
        assert_eq!(extract_amount("spp rp 1.500.000"), Amount::Value(1_500_000));
        assert_eq!(extract_amount("spp 250,000"), Amount::Value(250_000));
    }

    #[test]
    fn test_scale_marker_not_applied() {
        assert_eq!(extract_amount("bayar spp 50 ribu"), Amount::Value(50));
        assert_eq!(extract_amount("uang saku 100rb"), Amount::Value(100));
        assert_eq!(extract_amount("saku 75K"), Amount::Value(75));
    }

    #[test]
    fn test_first_digit_run_wins() {
        assert_eq!(extract_amount("spp 2 bulan 300000"), Amount::Value(2));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_amount("bayar spp budi"), Amount::Unknown);
        assert_eq!(extract_amount(""), Amount::Unknown);
    }

    #[test]
    fn test_overflow_kept_raw() {
        let digits = "123456789012345678901234567890";
        assert_eq!(
            extract_amount(&format!("spp {}", digits)),
            Amount::Raw(digits.to_string())
        );
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(extract_amount("spp ١٥٠٠٠٠"), Amount::Unknown);
        assert_eq!(extract_amount("spp ١٥٠٠٠٠ 75000"), Amount::Value(75_000));
    }
}
