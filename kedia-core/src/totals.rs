//! Per-category spending totals over a set of parsed transactions.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::category::Category;
use crate::transaction::ParsedTransaction;

/// Inclusive `(start, end)` date window.
pub type DateRange = (NaiveDate, NaiveDate);

/// True when `date` falls inside `range`, both ends included.
pub fn in_range(date: NaiveDate, (start, end): DateRange) -> bool {
    start <= date && date <= end
}

/// Transactions dated inside `range`, in their original order.
pub fn transactions_in_range(
    txns: &[ParsedTransaction],
    range: DateRange,
) -> Vec<&ParsedTransaction> {
    txns.iter().filter(|t| in_range(t.date, range)).collect()
}

/// Sum of amounts per category, optionally restricted to `range`.
///
/// Only categories that actually occur get an entry. Iteration follows
/// category order.
pub fn category_totals(
    txns: &[ParsedTransaction],
    range: Option<DateRange>,
) -> BTreeMap<Category, f64> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for t in txns {
        if range.is_some_and(|r| !in_range(t.date, r)) {
            continue;
        }
        *totals.entry(t.category).or_insert(0.0) += t.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn txn(amount: f64, category: Category, day: u32) -> ParsedTransaction {
        ParsedTransaction::new(amount, "", category, june(day))
    }

    fn sample() -> Vec<ParsedTransaction> {
        vec![
            txn(500.0, Category::Food, 8),
            txn(200.0, Category::Transport, 8),
            txn(150.5, Category::Food, 10),
            txn(1500.0, Category::Bills, 1),
            txn(90.0, Category::Food, 20),
        ]
    }

    #[test]
    fn test_empty_input_has_no_totals() {
        assert!(category_totals(&[], None).is_empty());
        assert!(category_totals(&[], Some((june(1), june(30)))).is_empty());
    }

    #[test]
    fn test_totals_without_range() {
        let totals = category_totals(&sample(), None);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[&Category::Food], 740.5);
        assert_eq!(totals[&Category::Transport], 200.0);
        assert_eq!(totals[&Category::Bills], 1500.0);
        assert!(!totals.contains_key(&Category::Other));

        let order: Vec<Category> = totals.keys().copied().collect();
        assert_eq!(order, vec![Category::Food, Category::Transport, Category::Bills]);
    }

    #[test]
    fn test_range_ends_are_inclusive() {
        let totals = category_totals(&sample(), Some((june(8), june(10))));
        assert_eq!(totals[&Category::Food], 650.5);
        assert_eq!(totals[&Category::Transport], 200.0);
    }

    #[test]
    fn test_records_outside_range_dropped() {
        let totals = category_totals(&sample(), Some((june(9), june(19))));
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&Category::Food], 150.5);
        assert!(!totals.contains_key(&Category::Bills));
    }

    #[test]
    fn test_single_day_and_inverted_range() {
        let txns = sample();
        let picked = transactions_in_range(&txns, (june(20), june(20)));
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].amount, 90.0);
        assert!(transactions_in_range(&txns, (june(30), june(1))).is_empty());
    }
}
