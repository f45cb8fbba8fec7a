//! Space-delimited token helpers shared by the parsing stages.

/// Value pulled out of a phrase plus the text left for the next stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<T> {
    pub value: T,
    pub remaining: String,
}

impl<T> Extracted<T> {
    pub fn new(value: T, remaining: impl Into<String>) -> Self {
        Self {
            value,
            remaining: remaining.into(),
        }
    }
}

/// Split on single spaces. Runs of spaces produce empty tokens so that
/// rejoining preserves the original spacing.
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Rejoin `tokens` with single spaces, leaving out `count` tokens from `start`.
pub fn join_without(tokens: &[&str], start: usize, count: usize) -> String {
    let end = (start + count).min(tokens.len());
    tokens[..start]
        .iter()
        .chain(&tokens[end..])
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
