//! Amount extraction: the first numeric-looking token of a phrase.
//!
//! Accepted tokens look like `500`, `₹500`, `2,500.50` or `₹1,00,000`. The
//! rupee glyph and thousands separators are stripped, not validated against
//! any locale's grouping rules. When no whole token qualifies, the first
//! digit run embedded anywhere in the text is used instead (`₹500tip`).
//!
//! The leftmost match wins unconditionally, so in `3 bananas 50` the amount
//! is 3.

use kedia_core::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::tokens::{join_without, split_tokens, Extracted};

static AMOUNT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^₹?[0-9]+(\.[0-9]+)?$").expect("amount token pattern"));

static EMBEDDED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("embedded number pattern"));

/// Numeric value of a whole token, if it is an amount token.
pub fn amount_token_value(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "");
    if !AMOUNT_TOKEN.is_match(&cleaned) {
        return None;
    }
    cleaned.trim_start_matches('₹').parse().ok()
}

/// Pull the amount out of `text`, returning it with the remaining text.
pub fn extract_amount(text: &str) -> Result<Extracted<f64>, ParseError> {
    let tokens = split_tokens(text);

    for (i, token) in tokens.iter().enumerate() {
        trace!(index = i, token, "amount scan");
        if let Some(amount) = amount_token_value(token) {
            debug!(token, amount, "amount token");
            return Ok(Extracted::new(amount, join_without(&tokens, i, 1)));
        }
    }

    // No whole token; settle for a digit run inside one
    if let Some(m) = EMBEDDED_NUMBER.find(text) {
        if let Ok(amount) = m.as_str().parse::<f64>() {
            let remaining = format!("{}{}", &text[..m.start()], &text[m.end()..]);
            debug!(digits = m.as_str(), amount, "embedded amount");
            return Ok(Extracted::new(amount, remaining.trim()));
        }
    }

    debug!(text, "no amount");
    Err(ParseError::NoAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> (f64, String) {
        let e = extract_amount(text).unwrap();
        (e.value, e.remaining)
    }

    #[test]
    fn test_leading_amount() {
        assert_eq!(extract("500 pizza parso"), (500.0, "pizza parso".to_string()));
    }

    #[test]
    fn test_amount_in_middle() {
        assert_eq!(extract("pizza 250 kal"), (250.0, "pizza kal".to_string()));
        assert_eq!(extract("dinner 99.50"), (99.5, "dinner".to_string()));
    }

    #[test]
    fn test_rupee_glyph_and_separators() {
        assert_eq!(extract("₹2,500 myntra shopping"), (2500.0, "myntra shopping".to_string()));
        assert_eq!(extract("rent ₹1,00,000"), (100000.0, "rent".to_string()));
        assert_eq!(amount_token_value("₹12.75"), Some(12.75));
    }

    #[test]
    fn test_first_numeric_token_wins() {
        assert_eq!(extract("3 bananas 50"), (3.0, "bananas 50".to_string()));
        assert_eq!(extract("500 2 days back"), (500.0, "2 days back".to_string()));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(amount_token_value("5."), None);
        assert_eq!(amount_token_value(".5"), None);
        assert_eq!(amount_token_value("₹"), None);
        assert_eq!(amount_token_value("500₹"), None);
        assert_eq!(amount_token_value("-500"), None);
        assert_eq!(amount_token_value(""), None);
    }

    #[test]
    fn test_embedded_digit_run_fallback() {
        // only the digits are removed, not the whole token
        assert_eq!(extract("₹500tip to waiter"), (500.0, "₹tip to waiter".to_string()));
        assert_eq!(extract("coffee 80rs"), (80.0, "coffee rs".to_string()));
        assert_eq!(extract("paid rs.12.5 "), (12.5, "paid rs.".to_string()));
    }

    #[test]
    fn test_fallback_trims_edges() {
        assert_eq!(extract("rs450"), (450.0, "rs".to_string()));
        assert_eq!(extract("x1 "), (1.0, "x".to_string()));
    }

    #[test]
    fn test_no_digits_is_no_amount() {
        assert_eq!(extract_amount("lunch with friend"), Err(ParseError::NoAmount));
        assert_eq!(extract_amount(""), Err(ParseError::NoAmount));
        assert_eq!(extract_amount("₹ , ."), Err(ParseError::NoAmount));
    }

    #[test]
    fn test_any_numeral_token_never_fails() {
        for text in ["7", "a 7", "a b 7.25", "₹7 a", "a  7"] {
            assert!(extract_amount(text).is_ok(), "failed on {text:?}");
        }
    }

    #[test]
    fn test_spacing_preserved_around_removed_token() {
        assert_eq!(extract("a  500 b"), (500.0, "a  b".to_string()));
    }
}
