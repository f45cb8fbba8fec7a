//! Keyword-based category guessing for a transaction description.

use kedia_core::{Category, KeywordTable};
use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_KEYWORDS: Lazy<KeywordTable> = Lazy::new(KeywordTable::default);

/// Guess a category from the built-in English/Hindi keyword table.
pub fn guess_category(description: &str) -> Category {
    classify_with(&DEFAULT_KEYWORDS, description)
}

/// Guess a category using `table`, falling back to [`Category::Other`].
pub fn classify_with(table: &KeywordTable, description: &str) -> Category {
    match table.matching_keyword(description) {
        Some((category, keyword)) => {
            debug!(%category, keyword, "category keyword");
            category
        }
        None => Category::Other,
    }
}
