//! Parsed transaction record handed back to callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Result of parsing one free-text phrase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    /// Unsigned magnitude; the caller applies the sign
    pub amount: f64,
    /// Leftover words once amount and date are removed (may be empty)
    pub description: String,
    pub category: Category,
    /// Resolved calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Direction of money movement, chosen by the caller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Flow {
    #[default]
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl ParsedTransaction {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            date,
        }
    }

    /// Replace the parsed date with one supplied at entry time.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Amount with the caller's sign convention applied: debits are negative.
    pub fn signed_amount(&self, flow: Flow) -> f64 {
        match flow {
            Flow::Debit => -self.amount,
            Flow::Credit => self.amount,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
