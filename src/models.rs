//! Core data structures for the fleet list.
//!
//! Defines the parsed bus record, its status, the position-based record
//! identifier and the sort direction shared by the pivot and query views.

use crate::constants::{AC_LABEL, NON_AC_LABEL, RECORD_ID_PREFIX};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Record Identifier
// =============================================================================

/// Synthetic identifier derived from the record's position in the source
///
/// The position counts data lines (header excluded) before any line is
/// dropped, so identifiers are stable within one load but not across loads
/// of edited data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

impl RecordId {
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RECORD_ID_PREFIX, self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Bus Status
// =============================================================================

/// Operational status of a bus
///
/// The source field is taken literally: anything other than the three known
/// values is kept verbatim in `Other` rather than rejected or coerced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BusStatus {
    Active,
    Maintenance,
    Retired,
    Other(String),
}

impl BusStatus {
    /// Interpret a trimmed status field; empty means Active
    pub fn from_field(field: &str) -> Self {
        match field {
            "" | "Active" => BusStatus::Active,
            "Maintenance" => BusStatus::Maintenance,
            "Retired" => BusStatus::Retired,
            other => BusStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BusStatus::Active => "Active",
            BusStatus::Maintenance => "Maintenance",
            BusStatus::Retired => "Retired",
            BusStatus::Other(literal) => literal,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BusStatus::Active)
    }
}

impl Default for BusStatus {
    fn default() -> Self {
        BusStatus::Active
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BusStatus {
    fn from(value: String) -> Self {
        BusStatus::from_field(value.trim())
    }
}

impl From<BusStatus> for String {
    fn from(value: BusStatus) -> Self {
        value.as_str().to_string()
    }
}

// =============================================================================
// Bus Record
// =============================================================================

/// One row of the fleet inventory
///
/// Records are built once by the parser and only ever handed out by shared
/// reference afterwards; every derived view borrows them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: RecordId,
    pub depot: String,
    pub fleet_number: String,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub operator: String,
    #[serde(rename = "isAC")]
    pub is_ac: bool,
    pub service_type: String,
    /// Display string, never parsed as a date
    pub registration_date: String,
    pub status: BusStatus,
}

impl Bus {
    /// "AC" or "NonAC", the label of the two-way AC split
    pub fn ac_label(&self) -> &'static str {
        if self.is_ac { AC_LABEL } else { NON_AC_LABEL }
    }

    /// "Make Model" as shown in the fleet table
    pub fn make_model(&self) -> String {
        format!("{} {}", self.make, self.model).trim().to_string()
    }
}

// =============================================================================
// Sorting
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = crate::FleetError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(crate::FleetError::invalid_argument(format!(
                "Unknown sort direction '{}', expected asc or desc",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId(0).to_string(), "bus-0");
        assert_eq!(RecordId(41).to_string(), "bus-41");
        assert_eq!(serde_json::to_string(&RecordId(7)).unwrap(), "\"bus-7\"");
    }

    #[test]
    fn test_status_from_field() {
        assert_eq!(BusStatus::from_field(""), BusStatus::Active);
        assert_eq!(BusStatus::from_field("Active"), BusStatus::Active);
        assert_eq!(BusStatus::from_field("Maintenance"), BusStatus::Maintenance);
        assert_eq!(BusStatus::from_field("Retired"), BusStatus::Retired);
    }

    #[test]
    fn test_status_keeps_unknown_literals() {
        let status = BusStatus::from_field("Scrapped");
        assert_eq!(status, BusStatus::Other("Scrapped".to_string()));
        assert_eq!(status.to_string(), "Scrapped");

        // Case matters: only the exact literal maps onto a known variant
        let lowercase = BusStatus::from_field("active");
        assert_eq!(lowercase.as_str(), "active");
        assert!(!lowercase.is_active());
    }

    #[test]
    fn test_status_serializes_as_literal() {
        assert_eq!(
            serde_json::to_string(&BusStatus::Maintenance).unwrap(),
            "\"Maintenance\""
        );
        let parsed: BusStatus = serde_json::from_str("\"Retired\"").unwrap();
        assert_eq!(parsed, BusStatus::Retired);
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.flip(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
