//! Tests for the query engine

pub mod engine_tests;

pub use crate::app::services::fleet_parser::tests::{
    create_mixed_fleet, create_test_bus, create_test_fleet,
};

use crate::models::{Bus, RecordId};

/// Identifiers of a borrowed record list, for order assertions
pub fn ids(records: &[&Bus]) -> Vec<RecordId> {
    records.iter().map(|bus| bus.id).collect()
}
