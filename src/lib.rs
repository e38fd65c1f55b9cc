//! Fleet List Library
//!
//! A Rust library for loading a bus fleet inventory from its comma-delimited
//! source and deriving the views a fleet dashboard needs.
//!
//! This library provides tools for:
//! - Parsing the fleet list into typed records, dropping malformed lines
//! - Counting records by any classification field
//! - Building depot by service-type pivot tables with sortable rows
//! - Searching, filtering, sorting and paginating the fleet
//! - Assembling the data context handed to a natural-language analyst

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Core application modules
pub mod app {
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::services::aggregator::{GroupKey, GroupedCount, count_by};
pub use app::services::fleet_parser::{FleetParser, parse_fleet_data};
pub use app::services::pivot::{PivotSort, PivotTable, build_pivot};
pub use app::services::query::{FleetFilters, QueryParams, QueryResult, query};
pub use app::services::source::{FleetDataset, FleetSource, load_fleet};
pub use config::Config;
pub use error::{FleetError, Result};
pub use models::{Bus, BusStatus, RecordId, SortDirection};
