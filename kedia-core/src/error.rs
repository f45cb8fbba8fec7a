use thiserror::Error;

/// Failure of a free-text parse. Only the amount stage can fail; every
/// other stage falls back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no amount found in transaction text")]
    NoAmount,
}

/// A category name that does not name any [`crate::Category`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);
