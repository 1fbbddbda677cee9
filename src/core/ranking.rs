//! Top-N store ranking by revenue.

use crate::models::{Store, TopStore};
use rand::Rng;

/// Base amount the rank multipliers scale, six lakh.
pub const TOP_STORE_BASE_REVENUE: f64 = 600_000.0;

/// Display revenue multiplier for each rank, strictly descending.
pub const TOP_STORE_MULTIPLIERS: [f64; 10] = [2.5, 2.2, 1.9, 1.7, 1.5, 1.3, 1.1, 0.95, 0.8, 0.65];

/// Default length of the ranking.
pub const DEFAULT_TOP_STORES: usize = 10;

/// Display revenue for a zero-based rank, `None` past the end of the table.
// Products stay far below i64::MAX and are non-negative.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn ranked_revenue(rank: usize) -> Option<i64> {
    TOP_STORE_MULTIPLIERS
        .get(rank)
        .map(|m| (TOP_STORE_BASE_REVENUE * m).floor() as i64)
}

/// Ranks stores by generated revenue and keeps the first `n`.
///
/// Which stores qualify depends on their real revenue, with ties kept in
/// generation order. The returned `revenue` is then replaced by the fixed
/// per-rank display amount from [`ranked_revenue`], so the list is strictly
/// descending whatever the generated figures were. At most ten stores are
/// returned. `revenue_change` is drawn from `rng` in whole percent from -15 to 14.
pub fn top_stores_by_revenue<R: Rng>(stores: &[Store], n: usize, rng: &mut R) -> Vec<TopStore> {
    let mut ranked: Vec<&Store> = stores.iter().collect();
    // Stable, so equal revenue keeps insertion order.
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    ranked
        .into_iter()
        .take(n)
        .enumerate()
        .filter_map(|(rank, store)| {
            ranked_revenue(rank).map(|revenue| {
                let change = f64::from(rng.gen_range(0_i32..30) - 15);
                TopStore::from_store(store, revenue, change)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::generator::generate_stores;
    use crate::models::IndianState;
    use crate::test_utils::*;

    #[test]
    fn test_ranked_revenue_table() {
        let expected = [
            1_500_000, 1_320_000, 1_140_000, 1_020_000, 900_000, 780_000, 660_000, 570_000,
            480_000, 390_000,
        ];
        let actual: Vec<i64> = (0..10).filter_map(ranked_revenue).collect();
        assert_eq!(actual, expected);
        assert_eq!(ranked_revenue(10), None);
    }

    #[test]
    fn test_top_stores_strictly_descending() {
        let mut rng = seeded_rng(21);
        let stores = generate_stores(&mut rng);
        let top = top_stores_by_revenue(&stores, DEFAULT_TOP_STORES, &mut rng);

        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].revenue > pair[1].revenue);
        }
        for (rank, entry) in top.iter().enumerate() {
            assert_eq!(Some(entry.revenue), ranked_revenue(rank));
            assert!((-15.0..=14.0).contains(&entry.revenue_change));
        }
    }

    #[test]
    fn test_top_stores_selected_by_original_revenue() {
        let mut rng = seeded_rng(22);
        let stores = generate_stores(&mut rng);
        let top = top_stores_by_revenue(&stores, 10, &mut rng);

        let mut revenues: Vec<i64> = stores.iter().map(|s| s.revenue).collect();
        revenues.sort_unstable_by(|a, b| b.cmp(a));
        let cutoff = revenues[9];

        for entry in &top {
            let original = stores.iter().find(|s| s.id == entry.id).map(|s| s.revenue);
            assert!(original.is_some_and(|r| r >= cutoff));
        }
    }

    #[test]
    fn test_top_stores_ties_keep_insertion_order() {
        let stores = vec![
            store(1, IndianState::Assam, 5, 300_000),
            store(2, IndianState::Goa, 5, 500_000),
            store(3, IndianState::Goa, 5, 300_000),
            store(4, IndianState::Kerala, 5, 500_000),
        ];
        let top = top_stores_by_revenue(&stores, 10, &mut seeded_rng(1));

        let ids: Vec<u32> = top.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 4, 1, 3]);
        assert_eq!(top[0].revenue, 1_500_000);
        assert_eq!(top[3].revenue, 1_020_000);
    }

    #[test]
    fn test_top_stores_short_input_and_cap() {
        let stores = vec![store(1, IndianState::Assam, 5, 300_000)];
        assert_eq!(top_stores_by_revenue(&stores, 10, &mut seeded_rng(1)).len(), 1);
        assert!(top_stores_by_revenue(&[], 10, &mut seeded_rng(1)).is_empty());

        let many = generate_stores(&mut seeded_rng(2));
        assert_eq!(top_stores_by_revenue(&many, 25, &mut seeded_rng(1)).len(), 10);
        assert_eq!(top_stores_by_revenue(&many, 3, &mut seeded_rng(1)).len(), 3);
    }

    #[test]
    fn test_top_stores_leaves_input_untouched() {
        let stores = generate_stores(&mut seeded_rng(30));
        let before = stores.clone();
        let first = top_stores_by_revenue(&stores, 10, &mut seeded_rng(31));
        let second = top_stores_by_revenue(&stores, 10, &mut seeded_rng(31));

        assert_eq!(stores, before);
        assert_eq!(first, second);
    }
}
