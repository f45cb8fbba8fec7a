//! Orchestrates the amount, date and category stages into one record.

use chrono::{Local, NaiveDate};
use kedia_core::{KeywordTable, ParseError, ParsedTransaction};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::amount::extract_amount;
use crate::category::classify_with;
use crate::date::resolve_date;

static DEFAULT_PARSER: Lazy<TransactionParser> = Lazy::new(TransactionParser::default);

/// Free-text parser bound to a keyword table.
#[derive(Debug, Clone, Default)]
pub struct TransactionParser {
    keywords: KeywordTable,
}

impl TransactionParser {
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Parse a phrase such as `"200 uber 2 days back"`, resolving relative
    /// dates against `today`. Fails only when no amount can be found.
    pub fn parse(&self, text: &str, today: NaiveDate) -> Result<ParsedTransaction, ParseError> {
        let amount = extract_amount(text)?;
        let dated = resolve_date(&amount.remaining, today);
        let description = dated.remaining.trim();
        let category = classify_with(&self.keywords, description);

        debug!(
            amount = amount.value,
            description,
            %category,
            date = %dated.value,
            "parsed transaction"
        );

        Ok(ParsedTransaction::new(
            amount.value,
            description,
            category,
            dated.value,
        ))
    }
}

/// Parse `text` with the built-in keyword table. Relative dates resolve
/// against `today`, which the caller supplies.
pub fn parse_transaction_text(
    text: &str,
    today: NaiveDate,
) -> Result<ParsedTransaction, ParseError> {
    DEFAULT_PARSER.parse(text, today)
}

/// Like [`parse_transaction_text`], with `today` taken from the local clock.
pub fn parse_transaction_text_now(text: &str) -> Result<ParsedTransaction, ParseError> {
    parse_transaction_text(text, Local::now().date_naive())
}
