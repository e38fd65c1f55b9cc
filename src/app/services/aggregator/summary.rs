//! Fixed aggregate snapshots of the fleet
//!
//! [`FleetSummary`] is the contract with the natural-language analysis
//! collaborator and must stay computable from [`count_by`] alone.
//! [`DashboardStats`] backs the headline cards of the dashboard.

use serde::Serialize;

use super::count::{CategoryCount, GroupKey, GroupedCount, count_by};
use crate::constants::{
    AC_LABEL, ELECTRIC_SERVICE_TYPES, NON_AC_LABEL, VIDIYAL_PAYANAM_SERVICE_TYPES,
};
use crate::models::Bus;

/// Two-way AC / non-AC split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AcSplit {
    #[serde(rename = "AC")]
    pub ac: usize,
    #[serde(rename = "NonAC")]
    pub non_ac: usize,
}

/// Aggregate snapshot for the analysis collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_buses: usize,
    pub by_depot: GroupedCount,
    pub by_service_type: GroupedCount,
    pub by_status: GroupedCount,
    #[serde(rename = "byAC")]
    pub by_ac: AcSplit,
}

impl FleetSummary {
    pub fn from_records(records: &[Bus]) -> Self {
        let ac_counts = count_by(records, GroupKey::AcClass);

        Self {
            total_buses: records.len(),
            by_depot: count_by(records, GroupKey::Depot),
            by_service_type: count_by(records, GroupKey::ServiceType),
            by_status: count_by(records, GroupKey::Status),
            by_ac: AcSplit {
                ac: ac_counts.get(AC_LABEL),
                non_ac: ac_counts.get(NON_AC_LABEL),
            },
        }
    }
}

/// Headline figures shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_buses: usize,
    pub active_buses: usize,
    pub ac_buses: usize,
    pub electric_buses: usize,
    pub vidiyal_payanam_buses: usize,
    pub depot_count: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[Bus]) -> Self {
        let by_service = count_by(records, GroupKey::ServiceType);
        let sum_of = |labels: &[&str]| -> usize {
            labels.iter().map(|label| by_service.get(label)).sum()
        };

        Self {
            total_buses: records.len(),
            active_buses: records.iter().filter(|bus| bus.status.is_active()).count(),
            ac_buses: records.iter().filter(|bus| bus.is_ac).count(),
            electric_buses: sum_of(ELECTRIC_SERVICE_TYPES),
            vidiyal_payanam_buses: sum_of(VIDIYAL_PAYANAM_SERVICE_TYPES),
            depot_count: count_by(records, GroupKey::Depot).len(),
        }
    }
}

/// Service types by descending fleet size (ties in first-seen order)
pub fn service_distribution(records: &[Bus]) -> Vec<CategoryCount> {
    count_by(records, GroupKey::ServiceType).sorted_by_count()
}
