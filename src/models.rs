//! Data shapes shared between the generator, the derivation functions and the export.
//!
//! Every type serializes with camelCase field names so the export matches what
//! the rendering surface reads.

/// Per-state aggregates
pub mod rollup;
/// Monthly chain-wide aggregates
pub mod snapshot;
/// The fixed state enumeration
pub mod state;
/// Store records and ranked stores
pub mod store;

pub use rollup::StateRollup;
pub use snapshot::MonthlySnapshot;
pub use state::IndianState;
pub use store::{Store, TopStore};
