//! Per-state aggregates.

use super::IndianState;
use serde::{Deserialize, Serialize};

/// Totals for one state, plus the percentage deltas shown beside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRollup {
    /// State these totals belong to
    pub state: IndianState,
    /// Number of stores in the state
    pub store_count: i64,
    /// Sum of store headcount
    pub headcount: i64,
    /// Sum of store revenue
    pub revenue: i64,
    /// Percentage change in store count
    pub store_count_change: f64,
    /// Percentage change in headcount
    pub headcount_change: f64,
    /// Percentage change in revenue
    pub revenue_change: f64,
}
