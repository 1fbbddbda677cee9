//! Shared test utilities for the dashboard crate.
//!
//! This module provides seeded randomness and small builders for stores and
//! snapshot series so tests can assert exact values.

use crate::{
    core::generator::Dataset,
    models::{IndianState, MonthlySnapshot, Store},
};
use chrono::{Months, NaiveDate};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A deterministic RNG for the given seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shorthand for a valid calendar date; panics on an invalid one.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        panic!("invalid test date {year}-{month}-{day}");
    })
}

/// A generated dataset for the window ending October 2026.
#[must_use]
pub fn seeded_dataset(seed: u64) -> Dataset {
    Dataset::generate(&mut seeded_rng(seed), date(2026, 10, 18))
}

/// Creates a store with the given figures.
///
/// # Defaults
/// * `name`: `"Store {id}"`
/// * `city`: `"City 1"`
#[must_use]
pub fn store(id: u32, state: IndianState, headcount: i64, revenue: i64) -> Store {
    Store {
        id,
        name: format!("Store {id}"),
        city: "City 1".to_string(),
        state,
        headcount,
        revenue,
    }
}

/// Builds consecutive monthly snapshots, one per entry of `total_stores`.
///
/// The series ends at October 2026 and every other field sits at its baseline,
/// so tests only set what they check.
#[must_use]
pub fn snapshot_series(total_stores: &[i64]) -> Vec<MonthlySnapshot> {
    let last = date(2026, 10, 1);
    let len = u32::try_from(total_stores.len()).unwrap_or(u32::MAX);

    total_stores
        .iter()
        .zip((0..len).rev())
        .map(|(&stores, back)| {
            let period = last
                .checked_sub_months(Months::new(back))
                .unwrap_or(last);
            MonthlySnapshot {
                month: period.format("%B %Y").to_string(),
                short_month: period.format("%b").to_string(),
                period,
                total_stores: stores,
                total_headcount: 5_400,
                total_revenue: 50_000_000,
                net_employee_addition: 0,
                net_employee_reduction: 10,
                gross_earnings: 25_000_000,
                net_payable: 20_000_000,
                pf_payable: 1_500_000,
                pt_payable: 300_000,
                esic_payable: 800_000,
                it_payable: 2_500_000,
            }
        })
        .collect()
}
