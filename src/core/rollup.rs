//! State-wise rollups and the views derived from them.

use crate::core::metrics::mom_change;
use crate::models::{IndianState, StateRollup, Store};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw per-state sums before any change figures are attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct StateTotals {
    store_count: i64,
    headcount: i64,
    revenue: i64,
}

/// Groups stores by state in one pass, indexed by [`IndianState::index`].
fn state_totals(stores: &[Store]) -> [StateTotals; IndianState::COUNT] {
    let mut totals = [StateTotals::default(); IndianState::COUNT];
    for store in stores {
        let entry = &mut totals[store.state.index()];
        entry.store_count += 1;
        entry.headcount += store.headcount;
        entry.revenue += store.revenue;
    }
    totals
}

/// Sums stores per state, attaching synthetic percentage changes.
///
/// One rollup per state in [`IndianState::ALL`] order, including states with
/// no stores. The change figures are drawn from `rng` and do not describe any
/// earlier period: store count in whole percent from -10 to 9, headcount from
/// -7.5 to 6.5 and revenue from -12.5 to 11.5 in steps of one.
pub fn rollup_by_state<R: Rng>(stores: &[Store], rng: &mut R) -> Vec<StateRollup> {
    let totals = state_totals(stores);

    IndianState::ALL
        .iter()
        .zip(totals)
        .map(|(&state, t)| StateRollup {
            state,
            store_count: t.store_count,
            headcount: t.headcount,
            revenue: t.revenue,
            store_count_change: f64::from(rng.gen_range(0_i32..20) - 10),
            headcount_change: f64::from(rng.gen_range(0_i32..15)) - 7.5,
            revenue_change: f64::from(rng.gen_range(0_i32..25)) - 12.5,
        })
        .collect()
}

/// Sums stores per state and compares each state with its rollup from an earlier period.
///
/// States absent from `previous` report zero change.
#[must_use]
pub fn rollup_against_previous(stores: &[Store], previous: &[StateRollup]) -> Vec<StateRollup> {
    let totals = state_totals(stores);
    let mut earlier: [Option<&StateRollup>; IndianState::COUNT] = [None; IndianState::COUNT];
    for rollup in previous {
        earlier[rollup.state.index()] = Some(rollup);
    }

    IndianState::ALL
        .iter()
        .zip(totals)
        .map(|(&state, t)| {
            let prior = earlier[state.index()];
            StateRollup {
                state,
                store_count: t.store_count,
                headcount: t.headcount,
                revenue: t.revenue,
                store_count_change: mom_change(t.store_count, prior.map(|p| p.store_count)),
                headcount_change: mom_change(t.headcount, prior.map(|p| p.headcount)),
                revenue_change: mom_change(t.revenue, prior.map(|p| p.revenue)),
            }
        })
        .collect()
}

/// The `n` states with the most stores, ties kept in input order.
#[must_use]
pub fn top_states_by_store_count(rollups: &[StateRollup], n: usize) -> Vec<StateRollup> {
    let mut ranked = rollups.to_vec();
    ranked.sort_by(|a, b| b.store_count.cmp(&a.store_count));
    ranked.truncate(n);
    ranked
}

/// Rollups for the selected states; an empty selection keeps everything.
#[must_use]
pub fn filter_by_state(rollups: &[StateRollup], selected: &[IndianState]) -> Vec<StateRollup> {
    if selected.is_empty() {
        return rollups.to_vec();
    }
    rollups
        .iter()
        .filter(|r| selected.contains(&r.state))
        .cloned()
        .collect()
}

/// Rollup figure used to shade the state map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatMetric {
    /// Number of stores
    #[default]
    StoreCount,
    /// Total headcount
    Headcount,
    /// Total revenue
    Revenue,
}

impl HeatMetric {
    const fn read(self, rollup: &StateRollup) -> i64 {
        match self {
            Self::StoreCount => rollup.store_count,
            Self::Headcount => rollup.headcount,
            Self::Revenue => rollup.revenue,
        }
    }
}

/// Shading intensity for one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateIntensity {
    /// The state being shaded
    pub state: IndianState,
    /// Position between the smallest and largest value, `None` when the state has no value
    pub intensity: Option<f64>,
}

/// Min-max normalizes `metric` across `rollups` into `[0, 1]`.
///
/// States whose value is zero get no intensity. When every value is the same
/// each state with a value sits at the midpoint, `0.5`.
#[must_use]
pub fn heat_intensity(rollups: &[StateRollup], metric: HeatMetric) -> Vec<StateIntensity> {
    let values: Vec<i64> = rollups.iter().map(|r| metric.read(r)).collect();
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);

    rollups
        .iter()
        .zip(values)
        .map(|(rollup, value)| {
            let intensity = if value == 0 {
                None
            } else if max == min {
                Some(0.5)
            } else {
                #[allow(clippy::cast_precision_loss)]
                let scaled = (value - min) as f64 / (max - min) as f64;
                Some(scaled)
            };
            StateIntensity {
                state: rollup.state,
                intensity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::generator::generate_stores;
    use crate::test_utils::*;

    #[test]
    fn test_rollup_store_count_matches_total() {
        let mut rng = seeded_rng(5);
        let stores = generate_stores(&mut rng);
        let rollups = rollup_by_state(&stores, &mut rng);

        assert_eq!(rollups.len(), IndianState::COUNT);
        let total: i64 = rollups.iter().map(|r| r.store_count).sum();
        assert_eq!(total, i64::try_from(stores.len()).unwrap_or(i64::MAX));
    }

    #[test]
    fn test_rollup_sums_exactly_matching_stores() {
        let mut rng = seeded_rng(8);
        let stores = generate_stores(&mut rng);
        let rollups = rollup_by_state(&stores, &mut rng);

        for (rollup, state) in rollups.iter().zip(IndianState::ALL) {
            assert_eq!(rollup.state, state);
            let matching: Vec<&Store> = stores.iter().filter(|s| s.state == state).collect();
            assert_eq!(rollup.store_count as usize, matching.len());
            assert_eq!(rollup.headcount, matching.iter().map(|s| s.headcount).sum::<i64>());
            assert_eq!(rollup.revenue, matching.iter().map(|s| s.revenue).sum::<i64>());
        }
    }

    #[test]
    fn test_rollup_includes_states_without_stores() {
        let stores = vec![
            store(1, IndianState::Goa, 10, 200_000),
            store(2, IndianState::Goa, 5, 150_000),
            store(3, IndianState::Kerala, 7, 300_000),
        ];
        let rollups = rollup_by_state(&stores, &mut seeded_rng(1));

        let goa = &rollups[IndianState::Goa.index()];
        assert_eq!((goa.store_count, goa.headcount, goa.revenue), (2, 15, 350_000));
        let bihar = &rollups[IndianState::Bihar.index()];
        assert_eq!((bihar.store_count, bihar.headcount, bihar.revenue), (0, 0, 0));
    }

    #[test]
    fn test_rollup_synthetic_change_ranges() {
        let stores = generate_stores(&mut seeded_rng(2));
        let mut rng = seeded_rng(3);
        for _ in 0..20 {
            for r in rollup_by_state(&stores, &mut rng) {
                assert!((-10.0..=9.0).contains(&r.store_count_change));
                assert!((-7.5..=6.5).contains(&r.headcount_change));
                assert!((-12.5..=11.5).contains(&r.revenue_change));
                assert_eq!(r.headcount_change.fract().abs(), 0.5);
            }
        }
    }

    #[test]
    fn test_rollup_idempotent_for_same_rng_state() {
        let stores = generate_stores(&mut seeded_rng(4));
        let first = rollup_by_state(&stores, &mut seeded_rng(10));
        let second = rollup_by_state(&stores, &mut seeded_rng(10));
        assert_eq!(first, second);
    }

    #[test]
    fn test_rollup_against_previous_computes_real_deltas() {
        let previous = vec![StateRollup {
            state: IndianState::Goa,
            store_count: 2,
            headcount: 10,
            revenue: 400_000,
            store_count_change: 0.0,
            headcount_change: 0.0,
            revenue_change: 0.0,
        }];
        let stores = vec![
            store(1, IndianState::Goa, 6, 200_000),
            store(2, IndianState::Goa, 5, 240_000),
            store(3, IndianState::Goa, 4, 200_000),
            store(4, IndianState::Assam, 4, 100_000),
        ];

        let rollups = rollup_against_previous(&stores, &previous);
        let goa = &rollups[IndianState::Goa.index()];
        assert_eq!(goa.store_count_change, 50.0);
        assert_eq!(goa.headcount_change, 50.0);
        assert_eq!(goa.revenue_change, 60.0);

        // No earlier figure for Assam
        let assam = &rollups[IndianState::Assam.index()];
        assert_eq!(assam.store_count, 1);
        assert_eq!(assam.store_count_change, 0.0);
    }

    #[test]
    fn test_top_states_by_store_count_is_stable() {
        let stores = vec![
            store(1, IndianState::Assam, 5, 100_000),
            store(2, IndianState::Goa, 5, 100_000),
            store(3, IndianState::Kerala, 5, 100_000),
            store(4, IndianState::Kerala, 5, 100_000),
        ];
        let rollups = rollup_against_previous(&stores, &[]);
        let top = top_states_by_store_count(&rollups, 3);

        let states: Vec<IndianState> = top.iter().map(|r| r.state).collect();
        assert_eq!(
            states,
            [IndianState::Kerala, IndianState::Assam, IndianState::Goa]
        );
    }

    #[test]
    fn test_filter_by_state() {
        let rollups = rollup_against_previous(&[], &[]);
        assert_eq!(filter_by_state(&rollups, &[]).len(), IndianState::COUNT);

        let picked = filter_by_state(&rollups, &[IndianState::Punjab, IndianState::Assam]);
        let states: Vec<IndianState> = picked.iter().map(|r| r.state).collect();
        assert_eq!(states, [IndianState::Assam, IndianState::Punjab]);
    }

    #[test]
    fn test_heat_intensity_normalizes() {
        let stores = vec![
            store(1, IndianState::Assam, 5, 100_000),
            store(2, IndianState::Goa, 5, 100_000),
            store(3, IndianState::Goa, 5, 100_000),
            store(4, IndianState::Goa, 5, 100_000),
        ];
        let rollups = filter_by_state(
            &rollup_against_previous(&stores, &[]),
            &[IndianState::Assam, IndianState::Bihar, IndianState::Goa],
        );

        let heat = heat_intensity(&rollups, HeatMetric::StoreCount);
        assert_eq!(heat[0].intensity, Some(1.0 / 3.0));
        assert_eq!(heat[1].intensity, None);
        assert_eq!(heat[2].intensity, Some(1.0));
    }

    #[test]
    fn test_heat_intensity_flat_values() {
        let stores = vec![
            store(1, IndianState::Assam, 5, 100_000),
            store(2, IndianState::Goa, 5, 100_000),
        ];
        let rollups = filter_by_state(
            &rollup_against_previous(&stores, &[]),
            &[IndianState::Assam, IndianState::Goa],
        );
        let heat = heat_intensity(&rollups, HeatMetric::Revenue);
        assert!(heat.iter().all(|h| h.intensity == Some(0.5)));
    }
}
