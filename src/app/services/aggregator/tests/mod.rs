//! Tests for grouped counts and fleet snapshots

pub mod count_tests;

pub use crate::app::services::fleet_parser::tests::{
    create_mixed_fleet, create_test_bus, create_test_fleet,
};
