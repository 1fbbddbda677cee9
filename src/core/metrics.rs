//! Month-over-month metrics.
//!
//! Every function here is total: missing months yield zero values and zero
//! change instead of errors, so the dashboard always has something to show.

use crate::models::MonthlySnapshot;
use serde::{Deserialize, Serialize};

/// Percentage change from `previous` to `current`, rounded to one decimal.
///
/// Returns `0.0` when there is no previous value or it is zero.
///
/// # Examples
/// ```
/// use cfo_dashboard::core::metrics::mom_change;
/// assert_eq!(mom_change(110, Some(100)), 10.0);
/// assert_eq!(mom_change(5, Some(0)), 0.0);
/// assert_eq!(mom_change(5, None), 0.0);
/// ```
#[must_use]
pub fn mom_change(current: i64, previous: Option<i64>) -> f64 {
    match previous {
        None | Some(0) => 0.0,
        Some(previous) => {
            // Widened so extreme inputs cannot overflow the difference.
            let delta = i128::from(current) - i128::from(previous);
            #[allow(clippy::cast_precision_loss)]
            let percent = delta as f64 / previous as f64 * 100.0;
            round_to_tenth(percent)
        }
    }
}

/// Rounds to one decimal place, half away from zero.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Latest snapshot in the series.
#[must_use]
pub fn current_month(snapshots: &[MonthlySnapshot]) -> Option<&MonthlySnapshot> {
    snapshots.last()
}

/// Snapshot immediately before the latest one.
#[must_use]
pub fn previous_month(snapshots: &[MonthlySnapshot]) -> Option<&MonthlySnapshot> {
    snapshots.len().checked_sub(2).and_then(|i| snapshots.get(i))
}

/// A headline value and its change against the previous month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetric {
    /// Current month value
    pub value: i64,
    /// Month-over-month change in percent
    pub change: f64,
}

impl KeyMetric {
    /// Reads one field from the current and previous snapshots.
    fn compare(
        current: Option<&MonthlySnapshot>,
        previous: Option<&MonthlySnapshot>,
        field: fn(&MonthlySnapshot) -> i64,
    ) -> Self {
        let value = current.map_or(0, field);
        Self {
            value,
            change: mom_change(value, previous.map(field)),
        }
    }
}

/// The four headline cards at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Stores open this month
    pub total_stores: KeyMetric,
    /// Chain headcount this month
    pub total_employees: KeyMetric,
    /// Chain revenue this month
    pub total_revenue: KeyMetric,
    /// Gross payroll this month
    pub gross_earnings: KeyMetric,
}

impl KeyMetrics {
    /// Compares the latest snapshot with the one before it.
    #[must_use]
    pub fn from_snapshots(snapshots: &[MonthlySnapshot]) -> Self {
        let current = current_month(snapshots);
        let previous = previous_month(snapshots);
        Self {
            total_stores: KeyMetric::compare(current, previous, |s| s.total_stores),
            total_employees: KeyMetric::compare(current, previous, |s| s.total_headcount),
            total_revenue: KeyMetric::compare(current, previous, |s| s.total_revenue),
            gross_earnings: KeyMetric::compare(current, previous, |s| s.gross_earnings),
        }
    }
}

/// Workforce and payroll cards for the operations tab.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsMetrics {
    /// Net hires
    pub net_employee_addition: KeyMetric,
    /// Exits
    pub net_employee_reduction: KeyMetric,
    /// Gross payroll
    pub gross_earnings: KeyMetric,
    /// Net payroll
    pub net_payable: KeyMetric,
    /// Provident fund
    pub pf_payable: KeyMetric,
    /// Professional tax
    pub pt_payable: KeyMetric,
    /// ESIC
    pub esic_payable: KeyMetric,
    /// Income tax
    pub it_payable: KeyMetric,
}

impl OperationsMetrics {
    /// Compares the latest snapshot with the one before it.
    #[must_use]
    pub fn from_snapshots(snapshots: &[MonthlySnapshot]) -> Self {
        let current = current_month(snapshots);
        let previous = previous_month(snapshots);
        let metric = |field: fn(&MonthlySnapshot) -> i64| KeyMetric::compare(current, previous, field);
        Self {
            net_employee_addition: metric(|s| s.net_employee_addition),
            net_employee_reduction: metric(|s| s.net_employee_reduction),
            gross_earnings: metric(|s| s.gross_earnings),
            net_payable: metric(|s| s.net_payable),
            pf_payable: metric(|s| s.pf_payable),
            pt_payable: metric(|s| s.pt_payable),
            esic_payable: metric(|s| s.esic_payable),
            it_payable: metric(|s| s.it_payable),
        }
    }
}

/// One line of the current-versus-previous payroll table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollComparisonRow {
    /// Component name, e.g. `"Provident Fund"`
    pub name: &'static str,
    /// Current month amount
    pub current: i64,
    /// Previous month amount, zero when there is none
    pub previous: i64,
    /// Month-over-month change in percent
    pub change: f64,
}

const PAYROLL_COMPONENTS: [(&str, fn(&MonthlySnapshot) -> i64); 6] = [
    ("Gross Earnings", |s| s.gross_earnings),
    ("Net Payable", |s| s.net_payable),
    ("Provident Fund", |s| s.pf_payable),
    ("Professional Tax", |s| s.pt_payable),
    ("ESIC", |s| s.esic_payable),
    ("Income Tax", |s| s.it_payable),
];

/// Builds the payroll comparison table for the latest two months.
#[must_use]
pub fn payroll_comparison(snapshots: &[MonthlySnapshot]) -> Vec<PayrollComparisonRow> {
    let current = current_month(snapshots);
    let previous = previous_month(snapshots);

    PAYROLL_COMPONENTS
        .iter()
        .map(|&(name, field)| {
            let metric = KeyMetric::compare(current, previous, field);
            PayrollComparisonRow {
                name,
                current: metric.value,
                previous: previous.map_or(0, field),
                change: metric.change,
            }
        })
        .collect()
}
