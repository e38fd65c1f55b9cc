//! Single-line parsing for the fleet list
//!
//! A line is validated structurally, then its fields are trimmed and mapped
//! positionally onto the record schema.

use std::fmt;

use crate::constants::{EXPECTED_FIELD_COUNT, FIELD_DELIMITER, columns};
use crate::models::{Bus, BusStatus, RecordId};

/// Why a data line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Nothing left after stripping whitespace
    EmptyLine,
    /// Line starts with the delimiter (an all-empty row such as `,,,,,,,,,`)
    EmptyRow,
    /// Fewer fields than the schema needs
    TooFewFields { found: usize },
    /// Depot field is blank (kept as a guard; a trimmed line with an empty
    /// first field is reported as `EmptyRow` first)
    MissingDepot,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::EmptyLine => write!(f, "empty line"),
            DropReason::EmptyRow => write!(f, "empty row"),
            DropReason::TooFewFields { found } => write!(
                f,
                "expected {} fields, found {}",
                EXPECTED_FIELD_COUNT, found
            ),
            DropReason::MissingDepot => write!(f, "missing depot"),
        }
    }
}

/// Parse one data line into a record
///
/// `position` is the line's index among data lines (header excluded, before
/// any dropping) and becomes the record identifier.
pub fn parse_record_line(
    line: &str,
    position: usize,
    affirmative_token: &str,
) -> std::result::Result<Bus, DropReason> {
    let cleaned = line.trim();

    if cleaned.is_empty() {
        return Err(DropReason::EmptyLine);
    }

    if cleaned.starts_with(FIELD_DELIMITER) {
        return Err(DropReason::EmptyRow);
    }

    let fields: Vec<&str> = cleaned.split(FIELD_DELIMITER).map(str::trim).collect();

    if fields.len() < EXPECTED_FIELD_COUNT {
        return Err(DropReason::TooFewFields {
            found: fields.len(),
        });
    }

    if fields[columns::DEPOT].is_empty() {
        return Err(DropReason::MissingDepot);
    }

    Ok(Bus {
        id: RecordId(position),
        depot: fields[columns::DEPOT].to_string(),
        fleet_number: fields[columns::FLEET_NUMBER].to_string(),
        registration_number: fields[columns::REGISTRATION_NUMBER].to_string(),
        make: fields[columns::MAKE].to_string(),
        model: fields[columns::MODEL].to_string(),
        operator: fields[columns::OPERATOR].to_string(),
        is_ac: parse_ac_flag(fields[columns::IS_AC], affirmative_token),
        service_type: fields[columns::SERVICE_TYPE].to_string(),
        registration_date: fields[columns::REGISTRATION_DATE].to_string(),
        status: BusStatus::from_field(fields[columns::STATUS]),
    })
}

/// True only when the field equals the affirmative token, ignoring case
pub fn parse_ac_flag(field: &str, affirmative_token: &str) -> bool {
    field.trim().to_lowercase() == affirmative_token
}
