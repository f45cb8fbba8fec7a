//! kedia-parser: turns short free-text phrases like "500 pizza parso" into
//! structured transactions.
//!
//! Pipeline: amount → relative date → category. Each stage takes the text
//! the previous one left behind.

pub mod amount;
pub mod category;
pub mod date;
pub mod parser;
pub mod tokens;

pub use amount::extract_amount;
pub use category::{classify_with, guess_category};
pub use date::resolve_date;
pub use parser::{parse_transaction_text, parse_transaction_text_now, TransactionParser};
pub use tokens::Extracted;
