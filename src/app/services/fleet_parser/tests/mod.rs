//! Tests for the fleet list record parser
//!
//! Also hosts the record fixtures shared with the aggregator, pivot and query tests.


use crate::models::{Bus, BusStatus, RecordId};

/// Header line of the bundled fleet list
pub const TEST_HEADER: &str =
    "Depot,Fleet No,Reg No,Make,Model,Operator,AC,Service Type,Reg Date,Status";

/// Build fleet list text from data lines, prefixed with the header
pub fn create_fleet_text(lines: &[&str]) -> String {
    let mut text = String::from(TEST_HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}

/// Create a test bus with the fields that drive grouping and filtering
pub fn create_test_bus(position: usize, depot: &str, service_type: &str) -> Bus {
    Bus {
        id: RecordId(position),
        depot: depot.to_string(),
        fleet_number: format!("{}", 100 + position),
        registration_number: format!("TN01AB{:04}", position),
        make: "Ashok".to_string(),
        model: "Viking".to_string(),
        operator: "MTC".to_string(),
        is_ac: service_type.starts_with("AC"),
        service_type: service_type.to_string(),
        registration_date: "2020-01-01".to_string(),
        status: BusStatus::Active,
    }
}

/// Create a fleet from (depot, service type) pairs, in order
pub fn create_test_fleet(entries: &[(&str, &str)]) -> Vec<Bus> {
    entries
        .iter()
        .enumerate()
        .map(|(position, (depot, service_type))| create_test_bus(position, depot, service_type))
        .collect()
}

/// A deterministic fleet of `size` buses spread over depots and service types
pub fn create_mixed_fleet(size: usize) -> Vec<Bus> {
    const DEPOTS: &[&str] = &["Adyar", "Tambaram", "Vadapalani", "Ayanavaram", "Poonamallee"];
    const SERVICES: &[&str] = &[
        "Ordinary",
        "Deluxe",
        "AC",
        "Express",
        "AC(EV)",
        "Small Bus (Ordinary)",
    ];

    (0..size)
        .map(|position| {
            let depot = DEPOTS[(position * 7 + position / 3) % DEPOTS.len()];
            let service = SERVICES[(position * 5 + position / 2) % SERVICES.len()];
            let mut bus = create_test_bus(position, depot, service);
            bus.make = if position % 4 == 0 { "Leyland" } else { "Ashok" }.to_string();
            bus.status = match position % 9 {
                0 => BusStatus::Maintenance,
                4 => BusStatus::Retired,
                _ => BusStatus::Active,
            };
            bus
        })
        .collect()
}
