//! Text normalization and tokenization
//!
//! Messages arrive as chat text with line breaks, emoji, punctuation and
//! irregular spacing. Normalization reduces them to single-spaced words and
//! numbers; tokenization splits the result into [`Token`]s.

use pondok_core::Token;

/// Clean raw message text
///
/// Replaces newlines with spaces, removes ASCII punctuation, collapses
/// whitespace runs to a single space and trims both ends. Total over any input.
///
/// # Examples
/// ```
/// use pondok_text_processing::normalizer::normalize;
/// assert_eq!(normalize("Bayar SPP,\n  Rp.150.000!"), "Bayar SPP Rp150000");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        let ch = if ch == '\n' { ' ' } else { ch };
        if ch.is_ascii_punctuation() {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}

/// Letters allowed inside a word token: ASCII plus Latin-1 accented letters
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || (('\u{C0}'..='\u{FF}').contains(&ch) && ch != '×' && ch != '÷')
}

/// Split cleaned text into word and number tokens
///
/// Each token is a maximal run of letters or a maximal run of ASCII digits.
/// Every other character separates tokens and is dropped.
///
/// # Examples
/// ```
/// use pondok_text_processing::normalizer::tokenize;
/// let tokens = tokenize("spp 150rb");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, vec!["spp", "150", "rb"]);
/// ```
pub fn tokenize(cleaned: &str) -> Vec<Token> {
    #[derive(PartialEq)]
    enum Run {
        None,
        Word,
        Number,
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut run = Run::None;

    let flush = |current: &mut String, run: &Run, tokens: &mut Vec<Token>| {
        if current.is_empty() {
            return;
        }
        let text = std::mem::take(current);
        match run {
            Run::Word => tokens.push(Token::word(text)),
            Run::Number => tokens.push(Token::number(text)),
            Run::None => {}
        }
    };

    for ch in cleaned.chars() {
        let next = if is_word_char(ch) {
            Run::Word
        } else if ch.is_ascii_digit() {
            Run::Number
        } else {
            Run::None
        };

        if next != run {
            flush(&mut current, &run, &mut tokens);
            run = next;
        }
        if run != Run::None {
            current.push(ch);
        }
    }
    flush(&mut current, &run, &mut tokens);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(
            normalize("Assalamualaikum pak, mau bayar SPP!!"),
            "Assalamualaikum pak mau bayar SPP"
        );
        assert_eq!(normalize("a.n. Budi"), "an Budi");
    }

    #[test]
    fn test_normalize_thousands_separators_disappear() {
        assert_eq!(normalize("Rp 1.500.000,-"), "Rp 1500000");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize("  spp\n\nbulan\t ini  "), "spp bulan ini");
        assert_eq!(normalize("\r\n"), "");
    }

    #[test]
    fn test_normalize_punctuation_between_spaces() {
        assert_eq!(normalize("spp - 150000"), "spp 150000");
    }

    #[test]
    fn test_normalize_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!...,,;"), "");
    }

    #[test]
    fn test_normalize_keeps_non_ascii() {
        assert_eq!(normalize("José 🙏 terima kasih"), "José 🙏 terima kasih");
    }

    #[test]
    fn test_tokenize_words_and_numbers() {
        let tokens = tokenize("bayar spp 150000 untuk budi");
        assert_eq!(texts(&tokens), vec!["bayar", "spp", "150000", "untuk", "budi"]);
        assert!(tokens[0].is_word());
        assert!(!tokens[2].is_word());
    }

    #[test]
    fn test_tokenize_splits_letter_digit_boundaries() {
        assert_eq!(texts(&tokenize("rp150000 50rb")), vec!["rp", "150000", "50", "rb"]);
    }

    #[test]
    fn test_tokenize_accented_letters() {
        assert_eq!(texts(&tokenize("josé müller")), vec!["josé", "müller"]);
    }

    #[test]
    fn test_tokenize_drops_other_scripts_and_symbols() {
        assert_eq!(texts(&tokenize("spp 🙏 ok × 2")), vec!["spp", "ok", "2"]);
        assert_eq!(texts(&tokenize("łódź")), vec!["ód"]);
    }

    #[test]
    fn test_tokenize_ascii_digits_only() {
        assert_eq!(texts(&tokenize("spp ١٥٠٠٠٠ budi")), vec!["spp", "budi"]);
        assert_eq!(texts(&tokenize("ＳＰＰ ١٢٣")), Vec::<&str>::new());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
