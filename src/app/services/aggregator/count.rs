//! Grouped counting by classification key

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::models::Bus;
use crate::{FleetError, Result};

/// Record fields a fleet can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKey {
    Depot,
    Make,
    Model,
    Operator,
    ServiceType,
    Status,
    /// Derived "AC" / "NonAC" label
    #[serde(rename = "ac")]
    AcClass,
    RegistrationDate,
}

impl GroupKey {
    pub const ALL: &'static [GroupKey] = &[
        GroupKey::Depot,
        GroupKey::Make,
        GroupKey::Model,
        GroupKey::Operator,
        GroupKey::ServiceType,
        GroupKey::Status,
        GroupKey::AcClass,
        GroupKey::RegistrationDate,
    ];

    /// Category label of a record under this key
    pub fn label<'a>(&self, bus: &'a Bus) -> Cow<'a, str> {
        match self {
            GroupKey::Depot => Cow::Borrowed(&bus.depot),
            GroupKey::Make => Cow::Borrowed(&bus.make),
            GroupKey::Model => Cow::Borrowed(&bus.model),
            GroupKey::Operator => Cow::Borrowed(&bus.operator),
            GroupKey::ServiceType => Cow::Borrowed(&bus.service_type),
            GroupKey::Status => Cow::Borrowed(bus.status.as_str()),
            GroupKey::AcClass => Cow::Borrowed(bus.ac_label()),
            GroupKey::RegistrationDate => Cow::Borrowed(&bus.registration_date),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GroupKey::Depot => "depot",
            GroupKey::Make => "make",
            GroupKey::Model => "model",
            GroupKey::Operator => "operator",
            GroupKey::ServiceType => "service-type",
            GroupKey::Status => "status",
            GroupKey::AcClass => "ac",
            GroupKey::RegistrationDate => "registration-date",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupKey {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "depot" => Ok(GroupKey::Depot),
            "make" => Ok(GroupKey::Make),
            "model" => Ok(GroupKey::Model),
            "operator" => Ok(GroupKey::Operator),
            "service-type" | "service" | "servicetype" => Ok(GroupKey::ServiceType),
            "status" => Ok(GroupKey::Status),
            "ac" | "ac-class" => Ok(GroupKey::AcClass),
            "registration-date" | "reg-date" => Ok(GroupKey::RegistrationDate),
            _ => Err(FleetError::invalid_argument(format!(
                "Unknown grouping field '{}'. Available fields: {}",
                s,
                GroupKey::ALL
                    .iter()
                    .map(GroupKey::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

/// One category and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Category label -> count, remembering first-encountered order
///
/// Every classified record lands in exactly one bucket, including the empty
/// label, so the counts always sum to the number of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCount {
    entries: Vec<CategoryCount>,
    index: HashMap<String, usize>,
}

impl GroupedCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record under `label`
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Count for `label`, 0 when absent
    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Categories in first-encountered order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Categories by descending count; ties keep first-encountered order
    pub fn sorted_by_count(&self) -> Vec<CategoryCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl Serialize for GroupedCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.count)?;
        }
        map.end()
    }
}

/// Count records by a classification key
pub fn count_by(records: &[Bus], key: GroupKey) -> GroupedCount {
    let mut counts = GroupedCount::new();
    for bus in records {
        counts.increment(&key.label(bus));
    }
    counts
}

/// Count records by an arbitrary label selector
pub fn count_by_with<F>(records: &[Bus], selector: F) -> GroupedCount
where
    F: Fn(&Bus) -> String,
{
    let mut counts = GroupedCount::new();
    for bus in records {
        counts.increment(&selector(bus));
    }
    counts
}
