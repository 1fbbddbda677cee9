//! Chain-wide monthly aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar month's chain-wide figures. Currency amounts are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    /// Long label, e.g. `"October 2026"`
    pub month: String,
    /// Abbreviated label, e.g. `"Oct"`
    pub short_month: String,
    /// First day of the month this snapshot covers
    pub period: NaiveDate,
    /// Stores open during the month
    pub total_stores: i64,
    /// Employees across all stores
    pub total_headcount: i64,
    /// Revenue across all stores
    pub total_revenue: i64,
    /// Hires minus exits, can be negative
    pub net_employee_addition: i64,
    /// Employees who left during the month
    pub net_employee_reduction: i64,
    /// Payroll before deductions
    pub gross_earnings: i64,
    /// Payroll after deductions
    pub net_payable: i64,
    /// Provident fund contribution
    pub pf_payable: i64,
    /// Professional tax
    pub pt_payable: i64,
    /// Employees' State Insurance contribution
    pub esic_payable: i64,
    /// Income tax withheld
    pub it_payable: i64,
}
