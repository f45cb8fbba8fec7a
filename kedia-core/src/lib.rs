//! kedia-core: Core types for the Kedia free-text transaction parser

pub mod category;
pub mod error;
pub mod keywords;
pub mod time;
pub mod totals;
pub mod transaction;

pub use category::Category;
pub use error::{ParseError, UnknownCategory};
pub use keywords::KeywordTable;
pub use time::{parse_timezone, today_in, DEFAULT_TIMEZONE};
pub use totals::{category_totals, transactions_in_range, DateRange};
pub use transaction::{Flow, ParsedTransaction};
