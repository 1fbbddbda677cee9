//! Unit scaling and chart-ready series.
//!
//! Scaling only divides; rounding for display is left to whoever renders the series.

use crate::models::MonthlySnapshot;
use serde::Serialize;

/// One lakh, 10^5.
pub const LAKH: f64 = 100_000.0;
/// One million, 10^6.
pub const MILLION: f64 = 1_000_000.0;
/// One crore, 10^7.
pub const CRORE: f64 = 10_000_000.0;

// Rupee amounts here stay below 2^53, so the conversions are exact.
#[allow(clippy::cast_precision_loss)]
const fn as_f64(amount: i64) -> f64 {
    amount as f64
}

/// Rupees to lakhs.
#[must_use]
pub const fn to_lakhs(amount: i64) -> f64 {
    as_f64(amount) / LAKH
}

/// Rupees to millions.
#[must_use]
pub const fn to_millions(amount: i64) -> f64 {
    as_f64(amount) / MILLION
}

/// Rupees to crores.
#[must_use]
pub const fn to_crores(amount: i64) -> f64 {
    as_f64(amount) / CRORE
}

/// Revenue and headcount trend point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueTrendPoint {
    /// Short month label
    pub month: String,
    /// Revenue in crores
    pub revenue: f64,
    /// Chain headcount
    pub headcount: i64,
}

/// Store count with the change from the prior point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreGrowthPoint {
    /// Short month label
    pub month: String,
    /// Stores open in the month
    pub total_stores: i64,
    /// Difference to the previous month in the series, zero for the first
    pub store_growth: i64,
}

/// Hiring and attrition for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMovementPoint {
    /// Short month label
    pub month: String,
    /// Net additions, floored at zero
    pub additions: i64,
    /// Exits
    pub reductions: i64,
    /// Additions minus reductions, unfloored
    pub net_change: i64,
}

/// Payroll components; gross and net in millions, deductions in lakhs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollPoint {
    /// Short month label
    pub month: String,
    /// Gross earnings in millions
    pub gross: f64,
    /// Net payable in millions
    pub net: f64,
    /// Provident fund in lakhs
    pub pf: f64,
    /// Professional tax in lakhs
    pub pt: f64,
    /// ESIC in lakhs
    pub esic: f64,
    /// Income tax in lakhs
    pub it: f64,
}

/// Statutory deductions in lakhs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeductionsPoint {
    /// Short month label
    pub month: String,
    /// Provident fund in lakhs
    pub pf: f64,
    /// Professional tax in lakhs
    pub pt: f64,
    /// ESIC in lakhs
    pub esic: f64,
    /// Income tax in lakhs
    pub it: f64,
}

/// Revenue in crores with headcount, per month.
#[must_use]
pub fn revenue_trend(snapshots: &[MonthlySnapshot]) -> Vec<RevenueTrendPoint> {
    snapshots
        .iter()
        .map(|s| RevenueTrendPoint {
            month: s.short_month.clone(),
            revenue: to_crores(s.total_revenue),
            headcount: s.total_headcount,
        })
        .collect()
}

/// Store counts with month-to-month growth.
#[must_use]
pub fn store_growth(snapshots: &[MonthlySnapshot]) -> Vec<StoreGrowthPoint> {
    let mut prior: Option<i64> = None;
    snapshots
        .iter()
        .map(|s| {
            let growth = prior.map_or(0, |p| s.total_stores.saturating_sub(p));
            prior = Some(s.total_stores);
            StoreGrowthPoint {
                month: s.short_month.clone(),
                total_stores: s.total_stores,
                store_growth: growth,
            }
        })
        .collect()
}

/// Additions, reductions and net movement per month.
#[must_use]
pub fn employee_movement(snapshots: &[MonthlySnapshot]) -> Vec<EmployeeMovementPoint> {
    snapshots
        .iter()
        .map(|s| EmployeeMovementPoint {
            month: s.short_month.clone(),
            additions: s.net_employee_addition.max(0),
            reductions: s.net_employee_reduction,
            net_change: s
                .net_employee_addition
                .saturating_sub(s.net_employee_reduction),
        })
        .collect()
}

/// Payroll series in chart units.
#[must_use]
pub fn payroll_series(snapshots: &[MonthlySnapshot]) -> Vec<PayrollPoint> {
    snapshots
        .iter()
        .map(|s| PayrollPoint {
            month: s.short_month.clone(),
            gross: to_millions(s.gross_earnings),
            net: to_millions(s.net_payable),
            pf: to_lakhs(s.pf_payable),
            pt: to_lakhs(s.pt_payable),
            esic: to_lakhs(s.esic_payable),
            it: to_lakhs(s.it_payable),
        })
        .collect()
}

/// Deduction series in lakhs.
#[must_use]
pub fn deductions_series(snapshots: &[MonthlySnapshot]) -> Vec<DeductionsPoint> {
    snapshots
        .iter()
        .map(|s| DeductionsPoint {
            month: s.short_month.clone(),
            pf: to_lakhs(s.pf_payable),
            pt: to_lakhs(s.pt_payable),
            esic: to_lakhs(s.esic_payable),
            it: to_lakhs(s.it_payable),
        })
        .collect()
}
