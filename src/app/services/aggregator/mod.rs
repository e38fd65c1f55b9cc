//! Aggregation over the fleet list
//!
//! Grouped counts by any classification key, plus the two fixed snapshots
//! built from them: the dashboard statistics and the summary handed to the
//! natural-language analysis collaborator.

pub mod count;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use count::{CategoryCount, GroupKey, GroupedCount, count_by, count_by_with};
pub use summary::{AcSplit, DashboardStats, FleetSummary, service_distribution};
