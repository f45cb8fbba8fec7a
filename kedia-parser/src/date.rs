//! Relative date resolution ("kal", "parso", "3 days back", "2 din pehle").
//!
//! The text is lowercased and scanned token by token; the first relative
//! date expression found is resolved against the supplied `today` and its
//! tokens removed. Anything else leaves the date at `today`.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::tokens::{join_without, split_tokens, Extracted};

const DAY_WORDS: &[&str] = &["days", "din"];
const BACK_WORDS: &[&str] = &["back", "pehle", "ago"];

/// Days before today named by a single-word keyword.
fn keyword_offset(token: &str) -> Option<u64> {
    match token {
        "yesterday" | "kal" => Some(1),
        "parso" => Some(2),
        _ => None,
    }
}

/// Day count of a `<n> days back` pattern starting at `i`.
fn days_back_at(tokens: &[&str], i: usize) -> Option<u64> {
    let [count, unit, back] = tokens.get(i..i + 3)? else {
        return None;
    };
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !DAY_WORDS.contains(unit) || !BACK_WORDS.contains(back) {
        return None;
    }
    count.parse().ok()
}

/// Resolve the first relative date expression in `text` against `today`.
///
/// On a match the remaining text is the lowercased phrase without the
/// matched tokens; otherwise the text comes back untouched.
pub fn resolve_date(text: &str, today: NaiveDate) -> Extracted<NaiveDate> {
    let lowered = text.to_lowercase();
    let tokens = split_tokens(&lowered);

    for (i, &token) in tokens.iter().enumerate() {
        if let Some(offset) = keyword_offset(token) {
            if let Some(date) = today.checked_sub_days(Days::new(offset)) {
                debug!(keyword = token, %date, "relative date keyword");
                return Extracted::new(date, join_without(&tokens, i, 1));
            }
        }

        if let Some(offset) = days_back_at(&tokens, i) {
            // out-of-range counts are not a date; keep scanning
            if let Some(date) = today.checked_sub_days(Days::new(offset)) {
                debug!(days = offset, %date, "days back pattern");
                return Extracted::new(date, join_without(&tokens, i, 3));
            }
        }
    }

    Extracted::new(today, text)
}
