//! Free-text search and equality filters

use serde::{Deserialize, Serialize};

use crate::app::services::aggregator::GroupKey;
use crate::models::Bus;

/// Active filters; every filter is AND-combined and empty means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetFilters {
    /// Case-insensitive substring of registration number, fleet number or make
    pub search: String,
    /// Exact depot
    pub depot: String,
    /// Exact service type
    pub service_type: String,
}

impl FleetFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_depot(mut self, depot: impl Into<String>) -> Self {
        self.depot = depot.into();
        self
    }

    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.depot.is_empty() && self.service_type.is_empty()
    }

    /// Build a predicate with the search text lowercased once
    pub fn matcher(&self) -> impl Fn(&Bus) -> bool + '_ {
        let needle = self.search.to_lowercase();
        move |bus: &Bus| {
            let search_ok = needle.is_empty()
                || bus.registration_number.to_lowercase().contains(&needle)
                || bus.fleet_number.to_lowercase().contains(&needle)
                || bus.make.to_lowercase().contains(&needle);
            let depot_ok = self.depot.is_empty() || bus.depot == self.depot;
            let service_ok = self.service_type.is_empty() || bus.service_type == self.service_type;

            search_ok && depot_ok && service_ok
        }
    }

    pub fn matches(&self, bus: &Bus) -> bool {
        (self.matcher())(bus)
    }

    /// Matching records in their original order
    pub fn apply<'a>(&self, records: &'a [Bus]) -> Vec<&'a Bus> {
        let matches = self.matcher();
        records.iter().filter(|bus| matches(*bus)).collect()
    }
}

/// Distinct values of `key`, sorted ascending by code point
pub fn distinct_values(records: &[Bus], key: GroupKey) -> Vec<String> {
    let mut values: Vec<String> = records.iter().map(|bus| key.label(bus).into_owned()).collect();
    values.sort();
    values.dedup();
    values
}

/// Choices offered by the depot and service-type filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub depots: Vec<String>,
    pub service_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Bus]) -> Self {
        Self {
            depots: distinct_values(records, GroupKey::Depot),
            service_types: distinct_values(records, GroupKey::ServiceType),
        }
    }
}
