//! Record ordering for the fleet table
//!
//! The sortable fields form a closed set; each maps to a typed comparison
//! over the record instead of a lookup by field name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Bus, SortDirection};
use crate::{FleetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordSortField {
    Depot,
    FleetNumber,
    RegistrationNumber,
    Make,
    Model,
    Operator,
    IsAc,
    ServiceType,
    RegistrationDate,
    Status,
}

impl RecordSortField {
    pub const ALL: &'static [RecordSortField] = &[
        RecordSortField::Depot,
        RecordSortField::FleetNumber,
        RecordSortField::RegistrationNumber,
        RecordSortField::Make,
        RecordSortField::Model,
        RecordSortField::Operator,
        RecordSortField::IsAc,
        RecordSortField::ServiceType,
        RecordSortField::RegistrationDate,
        RecordSortField::Status,
    ];

    /// Ascending comparison; strings compare lexicographically, `false < true`
    pub fn compare(&self, a: &Bus, b: &Bus) -> Ordering {
        match self {
            RecordSortField::Depot => a.depot.cmp(&b.depot),
            RecordSortField::FleetNumber => a.fleet_number.cmp(&b.fleet_number),
            RecordSortField::RegistrationNumber => {
                a.registration_number.cmp(&b.registration_number)
            }
            RecordSortField::Make => a.make.cmp(&b.make),
            RecordSortField::Model => a.model.cmp(&b.model),
            RecordSortField::Operator => a.operator.cmp(&b.operator),
            RecordSortField::IsAc => a.is_ac.cmp(&b.is_ac),
            RecordSortField::ServiceType => a.service_type.cmp(&b.service_type),
            RecordSortField::RegistrationDate => a.registration_date.cmp(&b.registration_date),
            RecordSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordSortField::Depot => "depot",
            RecordSortField::FleetNumber => "fleet-number",
            RecordSortField::RegistrationNumber => "registration-number",
            RecordSortField::Make => "make",
            RecordSortField::Model => "model",
            RecordSortField::Operator => "operator",
            RecordSortField::IsAc => "is-ac",
            RecordSortField::ServiceType => "service-type",
            RecordSortField::RegistrationDate => "registration-date",
            RecordSortField::Status => "status",
        }
    }
}

impl fmt::Display for RecordSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordSortField {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "depot" => Ok(RecordSortField::Depot),
            "fleet-number" | "fleet" => Ok(RecordSortField::FleetNumber),
            "registration-number" | "reg" | "reg-number" => Ok(RecordSortField::RegistrationNumber),
            "make" => Ok(RecordSortField::Make),
            "model" => Ok(RecordSortField::Model),
            "operator" => Ok(RecordSortField::Operator),
            "is-ac" | "ac" => Ok(RecordSortField::IsAc),
            "service-type" | "service" => Ok(RecordSortField::ServiceType),
            "registration-date" | "reg-date" => Ok(RecordSortField::RegistrationDate),
            "status" => Ok(RecordSortField::Status),
            _ => Err(FleetError::invalid_argument(format!(
                "Unknown sort field '{}'. Available fields: {}",
                s,
                RecordSortField::ALL
                    .iter()
                    .map(RecordSortField::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

/// Single-key record ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSort {
    pub field: RecordSortField,
    pub direction: SortDirection,
}

impl RecordSort {
    pub fn new(field: RecordSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: RecordSortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Sort state after the user picks `field` in the fleet table
    ///
    /// A fresh field starts ascending; re-picking an ascending field turns it
    /// descending and re-picking a descending one turns it ascending again.
    pub fn toggled(current: Option<&RecordSort>, field: RecordSortField) -> Self {
        let direction = match current {
            Some(active) if active.field == field && active.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        Self { field, direction }
    }

    pub fn compare(&self, a: &Bus, b: &Bus) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}
