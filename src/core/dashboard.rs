//! Assembles every derived view the rendering surface consumes.

use crate::core::{
    generator::Dataset,
    metrics::{KeyMetrics, OperationsMetrics, PayrollComparisonRow, payroll_comparison},
    period::select_period,
    ranking::{DEFAULT_TOP_STORES, top_stores_by_revenue},
    rollup::{
        HeatMetric, StateIntensity, filter_by_state, heat_intensity, rollup_against_previous,
        rollup_by_state, top_states_by_store_count,
    },
    units::{
        DeductionsPoint, EmployeeMovementPoint, PayrollPoint, RevenueTrendPoint,
        StoreGrowthPoint, deductions_series, employee_movement, payroll_series, revenue_trend,
        store_growth,
    },
};
use crate::models::{IndianState, MonthlySnapshot, StateRollup, TopStore};
use rand::Rng;
use tracing::{debug, info};

/// How many states the store-count leaderboard shows.
const TOP_STATES: usize = 10;

/// Knobs for building a [`Dashboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Trailing months shown in the monthly views (3, 6 or 12 on the dashboard)
    pub period_months: usize,
    /// Length of the top store ranking
    pub top_store_count: usize,
    /// States shown in the state view and map; empty means all
    pub states: Vec<IndianState>,
    /// Figure the state map is shaded by
    pub heat_metric: HeatMetric,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            period_months: 12,
            top_store_count: DEFAULT_TOP_STORES,
            states: Vec::new(),
            heat_metric: HeatMetric::default(),
        }
    }
}

/// Every derived figure shown on the dashboard.
///
/// Headline and operations metrics always compare the latest two months of
/// the full series; the period only narrows the monthly views and charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Headline cards
    pub key_metrics: KeyMetrics,
    /// Operations tab cards
    pub operations: OperationsMetrics,
    /// Current versus previous month payroll table
    pub payroll_comparison: Vec<PayrollComparisonRow>,
    /// Snapshots inside the selected period
    pub monthly_data: Vec<MonthlySnapshot>,
    /// One rollup per state
    pub state_rollups: Vec<StateRollup>,
    /// States with the most stores
    pub top_states: Vec<StateRollup>,
    /// Rollups for the selected states
    pub selected_states: Vec<StateRollup>,
    /// Map shading for the selected states
    pub heat_map: Vec<StateIntensity>,
    /// Ranked stores
    pub top_stores: Vec<TopStore>,
    /// Revenue trend chart
    pub revenue_trend: Vec<RevenueTrendPoint>,
    /// Store growth chart
    pub store_growth: Vec<StoreGrowthPoint>,
    /// Employee movement chart
    pub employee_movement: Vec<EmployeeMovementPoint>,
    /// Payroll chart
    pub payroll: Vec<PayrollPoint>,
    /// Deductions chart
    pub deductions: Vec<DeductionsPoint>,
}

impl Dashboard {
    /// Derives the dashboard from a dataset.
    ///
    /// With `previous_rollups` the state changes compare against that earlier
    /// period; without it they are drawn from `rng` like the store ranking's.
    pub fn build<R: Rng>(
        dataset: &Dataset,
        options: &DashboardOptions,
        previous_rollups: Option<&[StateRollup]>,
        rng: &mut R,
    ) -> Self {
        let monthly = select_period(&dataset.snapshots, options.period_months);
        debug!(
            "Building dashboard over {} of {} months",
            monthly.len(),
            dataset.snapshots.len()
        );

        let state_rollups = match previous_rollups {
            Some(previous) => rollup_against_previous(&dataset.stores, previous),
            None => rollup_by_state(&dataset.stores, rng),
        };
        let top_stores = top_stores_by_revenue(&dataset.stores, options.top_store_count, rng);
        let key_metrics = KeyMetrics::from_snapshots(&dataset.snapshots);
        let selected_states = filter_by_state(&state_rollups, &options.states);
        let heat_map = heat_intensity(&selected_states, options.heat_metric);

        info!(
            "Dashboard ready: {} stores across {} states, revenue {} ({:+.1}% MoM)",
            dataset.stores.len(),
            state_rollups.iter().filter(|r| r.store_count > 0).count(),
            key_metrics.total_revenue.value,
            key_metrics.total_revenue.change
        );

        Self {
            key_metrics,
            operations: OperationsMetrics::from_snapshots(&dataset.snapshots),
            payroll_comparison: payroll_comparison(&dataset.snapshots),
            monthly_data: monthly.to_vec(),
            top_states: top_states_by_store_count(&state_rollups, TOP_STATES),
            selected_states,
            heat_map,
            state_rollups,
            top_stores,
            revenue_trend: revenue_trend(monthly),
            store_growth: store_growth(monthly),
            employee_movement: employee_movement(monthly),
            payroll: payroll_series(monthly),
            deductions: deductions_series(monthly),
        }
    }
}
