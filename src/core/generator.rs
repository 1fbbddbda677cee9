//! Synthetic data generation.
//!
//! Produces the store collection and the rolling twelve-month snapshot series
//! from bounded uniform ranges. Randomness is always injected so callers can
//! seed it; the binary supplies a time-seeded [`rand::rngs::StdRng`] unless a
//! seed is configured.

use crate::models::{IndianState, MonthlySnapshot, Store};
use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;
use tracing::{debug, trace};

/// Number of monthly snapshots in the rolling window.
pub const MONTHS_IN_WINDOW: u32 = 12;

/// Stores generated per state, half-open.
const STORES_PER_STATE: (u32, u32) = (10, 50);
/// Employees per store, half-open.
const STORE_HEADCOUNT: (i64, i64) = (5, 25);
/// Revenue per store in rupees, half-open.
const STORE_REVENUE: (i64, i64) = (100_000, 600_000);

/// A bounded random field: `baseline + uniform[0, width) - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    /// Value the field is perturbed around
    pub baseline: i64,
    /// Width of the uniform perturbation
    pub width: i64,
    /// Amount subtracted after perturbing, centering the range
    pub offset: i64,
}

impl FieldRange {
    const fn new(baseline: i64, width: i64, offset: i64) -> Self {
        Self {
            baseline,
            width,
            offset,
        }
    }

    /// Smallest value [`FieldRange::sample`] can return.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.baseline - self.offset
    }

    /// One past the largest value [`FieldRange::sample`] can return.
    #[must_use]
    pub const fn max_exclusive(&self) -> i64 {
        self.baseline + self.width - self.offset
    }

    /// Draws one value from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        self.baseline + rng.gen_range(0..self.width) - self.offset
    }
}

/// Ranges for every numeric field of a [`MonthlySnapshot`].
pub mod ranges {
    use super::FieldRange;

    /// Stores open in the month
    pub const TOTAL_STORES: FieldRange = FieldRange::new(800, 50, 25);
    /// Chain headcount
    pub const TOTAL_HEADCOUNT: FieldRange = FieldRange::new(5_400, 200, 100);
    /// Chain revenue, 4.5 to 5.5 crore
    pub const TOTAL_REVENUE: FieldRange = FieldRange::new(50_000_000, 10_000_000, 5_000_000);
    /// Net hires
    pub const NET_EMPLOYEE_ADDITION: FieldRange = FieldRange::new(0, 100, 50);
    /// Exits
    pub const NET_EMPLOYEE_REDUCTION: FieldRange = FieldRange::new(10, 80, 0);
    /// Gross payroll, 2.5 to 3 crore
    pub const GROSS_EARNINGS: FieldRange = FieldRange::new(25_000_000, 5_000_000, 0);
    /// Net payroll, 2 to 2.4 crore
    pub const NET_PAYABLE: FieldRange = FieldRange::new(20_000_000, 4_000_000, 0);
    /// Provident fund, 15 to 18 lakh
    pub const PF_PAYABLE: FieldRange = FieldRange::new(1_500_000, 300_000, 0);
    /// Professional tax, 3 to 4 lakh
    pub const PT_PAYABLE: FieldRange = FieldRange::new(300_000, 100_000, 0);
    /// ESIC, 8 to 10 lakh
    pub const ESIC_PAYABLE: FieldRange = FieldRange::new(800_000, 200_000, 0);
    /// Income tax, 25 to 30 lakh
    pub const IT_PAYABLE: FieldRange = FieldRange::new(2_500_000, 500_000, 0);
}

/// Raw generator output: the store collection and the monthly series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Stores grouped by state in canonical state order
    pub stores: Vec<Store>,
    /// Twelve snapshots, oldest first
    pub snapshots: Vec<MonthlySnapshot>,
}

impl Dataset {
    /// Generates stores and the snapshot window ending at `today`'s month.
    pub fn generate<R: Rng>(rng: &mut R, today: NaiveDate) -> Self {
        let stores = generate_stores(rng);
        let snapshots = generate_monthly_snapshots(rng, today);
        debug!(
            "Generated dataset with {} stores and {} monthly snapshots",
            stores.len(),
            snapshots.len()
        );
        Self { stores, snapshots }
    }
}

/// Generates between 10 and 49 stores for every state.
///
/// Output is grouped by state in [`IndianState::ALL`] order; ids start at 1
/// and increase in output order.
pub fn generate_stores<R: Rng>(rng: &mut R) -> Vec<Store> {
    let mut stores = Vec::new();
    let mut next_id: u32 = 1;

    for state in IndianState::ALL {
        let count = rng.gen_range(STORES_PER_STATE.0..STORES_PER_STATE.1);
        trace!("Generating {} stores for {}", count, state);
        for i in 0..count {
            stores.push(Store {
                id: next_id,
                name: format!("Store {next_id}"),
                city: format!("City {}", i + 1),
                state,
                headcount: rng.gen_range(STORE_HEADCOUNT.0..STORE_HEADCOUNT.1),
                revenue: rng.gen_range(STORE_REVENUE.0..STORE_REVENUE.1),
            });
            next_id += 1;
        }
    }

    stores
}

/// Generates one snapshot per month for the twelve months ending at `today`'s month.
///
/// The series is ordered oldest first and the final entry covers the month
/// containing `today`.
pub fn generate_monthly_snapshots<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
) -> Vec<MonthlySnapshot> {
    let current = first_of_month(today);

    (0..MONTHS_IN_WINDOW)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(|period| generate_snapshot(rng, period))
        .collect()
}

fn generate_snapshot<R: Rng>(rng: &mut R, period: NaiveDate) -> MonthlySnapshot {
    MonthlySnapshot {
        month: period.format("%B %Y").to_string(),
        short_month: period.format("%b").to_string(),
        period,
        total_stores: ranges::TOTAL_STORES.sample(rng),
        total_headcount: ranges::TOTAL_HEADCOUNT.sample(rng),
        total_revenue: ranges::TOTAL_REVENUE.sample(rng),
        net_employee_addition: ranges::NET_EMPLOYEE_ADDITION.sample(rng),
        net_employee_reduction: ranges::NET_EMPLOYEE_REDUCTION.sample(rng),
        gross_earnings: ranges::GROSS_EARNINGS.sample(rng),
        net_payable: ranges::NET_PAYABLE.sample(rng),
        pf_payable: ranges::PF_PAYABLE.sample(rng),
        pt_payable: ranges::PT_PAYABLE.sample(rng),
        esic_payable: ranges::ESIC_PAYABLE.sample(rng),
        it_payable: ranges::IT_PAYABLE.sample(rng),
    }
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
