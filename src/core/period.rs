//! Selecting which months the dashboard shows.

use crate::models::MonthlySnapshot;
use chrono::NaiveDate;

/// The trailing `months` snapshots, or all of them when fewer exist.
#[must_use]
pub fn select_period(snapshots: &[MonthlySnapshot], months: usize) -> &[MonthlySnapshot] {
    let start = snapshots.len().saturating_sub(months);
    &snapshots[start..]
}

/// Snapshots whose month starts within `start..=end`.
#[must_use]
pub fn filter_by_date_range(
    snapshots: &[MonthlySnapshot],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<MonthlySnapshot> {
    snapshots
        .iter()
        .filter(|s| s.period >= start && s.period <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_select_period_takes_trailing_months() {
        let snapshots = snapshot_series(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

        let last_three: Vec<i64> = select_period(&snapshots, 3)
            .iter()
            .map(|s| s.total_stores)
            .collect();
        assert_eq!(last_three, [10, 11, 12]);
        assert_eq!(select_period(&snapshots, 6).len(), 6);
        assert_eq!(select_period(&snapshots, 12).len(), 12);
        assert_eq!(select_period(&snapshots, 24).len(), 12);
        assert!(select_period(&snapshots, 0).is_empty());
        assert!(select_period(&[], 3).is_empty());
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        // Series months run from 2025-11 to 2026-10
        let snapshots = snapshot_series(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

        let picked = filter_by_date_range(&snapshots, date(2026, 1, 1), date(2026, 3, 1));
        let stores: Vec<i64> = picked.iter().map(|s| s.total_stores).collect();
        assert_eq!(stores, [3, 4, 5]);

        // A range inside a month misses that month's first day
        assert!(filter_by_date_range(&snapshots, date(2026, 1, 2), date(2026, 1, 31)).is_empty());
    }
}
