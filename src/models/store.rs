//! Retail outlet records.

use super::IndianState;
use serde::{Deserialize, Serialize};

/// One retail outlet. Created once by the generator and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique, positive, assigned sequentially at generation time
    pub id: u32,
    /// Display name (`"Store {id}"`)
    pub name: String,
    /// Display city (`"City {n}"`, numbered within the state)
    pub city: String,
    /// State the outlet belongs to
    pub state: IndianState,
    /// Employees at this outlet
    pub headcount: i64,
    /// Revenue in whole rupees
    pub revenue: i64,
}

/// A store selected into the top-N revenue ranking.
///
/// `revenue` holds the display revenue assigned by rank, not the store's
/// generated revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStore {
    /// Id of the ranked store
    pub id: u32,
    /// Display name
    pub name: String,
    /// Display city
    pub city: String,
    /// State the outlet belongs to
    pub state: IndianState,
    /// Employees at this outlet
    pub headcount: i64,
    /// Rank-derived display revenue in whole rupees
    pub revenue: i64,
    /// Percentage change shown next to the revenue
    pub revenue_change: f64,
}

impl TopStore {
    /// Builds a ranked entry from a store, replacing its revenue.
    #[must_use]
    pub fn from_store(store: &Store, revenue: i64, revenue_change: f64) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            city: store.city.clone(),
            state: store.state,
            headcount: store.headcount,
            revenue,
            revenue_change,
        }
    }
}
