//! Row ordering for the pivot table

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::builder::PivotRow;
use crate::FleetError;
use crate::models::SortDirection;

/// What pivot rows are ordered by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PivotSortField {
    /// Row label, compared as a string
    Name,
    /// Row total
    Total,
    /// The row's count in one column (0 when absent)
    Column(String),
}

impl fmt::Display for PivotSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotSortField::Name => f.write_str("name"),
            PivotSortField::Total => f.write_str("total"),
            PivotSortField::Column(column) => f.write_str(column),
        }
    }
}

impl Serialize for PivotSortField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for PivotSortField {
    type Err = FleetError;

    /// `name` and `total` are reserved; anything else names a column
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PivotSortField::Name),
            "total" => Ok(PivotSortField::Total),
            column => Ok(PivotSortField::Column(column.to_string())),
        }
    }
}

/// Active pivot ordering; defaults to largest total first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotSort {
    pub field: PivotSortField,
    pub direction: SortDirection,
}

impl Default for PivotSort {
    fn default() -> Self {
        Self {
            field: PivotSortField::Total,
            direction: SortDirection::Desc,
        }
    }
}

impl PivotSort {
    pub fn new(field: PivotSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Sort state after the user picks `field`
    ///
    /// Picking the active field flips its direction; picking any other
    /// field, `name` included, starts descending.
    pub fn toggle(&self, field: PivotSortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { field, direction }
    }

    pub fn compare(&self, a: &PivotRow, b: &PivotRow) -> Ordering {
        let ordering = match &self.field {
            PivotSortField::Name => a.label.cmp(&b.label),
            PivotSortField::Total => a.total.cmp(&b.total),
            PivotSortField::Column(column) => a.count(column).cmp(&b.count(column)),
        };
        self.direction.apply(ordering)
    }
}
