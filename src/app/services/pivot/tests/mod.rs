//! Tests for the pivot builder and pivot sorting

pub mod builder_tests;

pub use crate::app::services::fleet_parser::tests::{create_mixed_fleet, create_test_fleet};

use crate::app::services::aggregator::GroupKey;
use crate::app::services::pivot::{PivotTable, build_pivot};
use crate::models::Bus;

/// Depot x service type pivot, the layout of the depot breakdown page
pub fn depot_pivot(records: &[Bus]) -> PivotTable {
    build_pivot(records, GroupKey::Depot, GroupKey::ServiceType)
}
