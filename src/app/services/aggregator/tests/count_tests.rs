//! Tests for count_by and GroupedCount

use super::*;
use crate::app::services::aggregator::{GroupKey, GroupedCount, count_by, count_by_with};
use crate::models::BusStatus;

#[test]
fn test_count_by_service_type_scenario() {
    let fleet = create_test_fleet(&[("Adyar", "AC"), ("Adyar", "AC"), ("Tambaram", "Ordinary")]);
    let counts = count_by(&fleet, GroupKey::ServiceType);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("AC"), 2);
    assert_eq!(counts.get("Ordinary"), 1);
    assert_eq!(counts.get("Deluxe"), 0);
}

#[test]
fn test_empty_input_yields_empty_mapping() {
    let counts = count_by(&[], GroupKey::Depot);
    assert!(counts.is_empty());
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_empty_label_is_a_bucket() {
    let fleet = create_test_fleet(&[("Adyar", ""), ("Adyar", "AC"), ("Adyar", "")]);
    let counts = count_by(&fleet, GroupKey::ServiceType);

    assert!(counts.contains(""));
    assert_eq!(counts.get(""), 2);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_counts_sum_to_total_for_every_key() {
    for size in [0, 1, 7, 52, 300] {
        let fleet = create_mixed_fleet(size);
        for key in GroupKey::ALL {
            assert_eq!(
                count_by(&fleet, *key).total(),
                fleet.len(),
                "sum mismatch for {} on {} records",
                key,
                size
            );
        }
    }
}

#[test]
fn test_counts_do_not_depend_on_input_order() {
    let fleet = create_mixed_fleet(120);
    let mut reversed = fleet.clone();
    reversed.reverse();

    let forward = count_by(&fleet, GroupKey::Depot);
    let backward = count_by(&reversed, GroupKey::Depot);
    for entry in forward.iter() {
        assert_eq!(backward.get(&entry.label), entry.count);
    }
    assert_eq!(forward.len(), backward.len());
}

#[test]
fn test_first_encountered_order() {
    let fleet = create_test_fleet(&[
        ("Tambaram", "Ordinary"),
        ("Adyar", "AC"),
        ("Tambaram", "Deluxe"),
        ("Vadapalani", "AC"),
    ]);
    let counts = count_by(&fleet, GroupKey::Depot);
    let labels: Vec<&str> = counts.labels().collect();

    assert_eq!(labels, vec!["Tambaram", "Adyar", "Vadapalani"]);
}

#[test]
fn test_sorted_by_count_breaks_ties_by_first_seen() {
    let fleet = create_test_fleet(&[
        ("A", "Express"),
        ("A", "Ordinary"),
        ("A", "Deluxe"),
        ("A", "Ordinary"),
        ("A", "Deluxe"),
    ]);
    let sorted = count_by(&fleet, GroupKey::ServiceType).sorted_by_count();
    let labels: Vec<&str> = sorted.iter().map(|entry| entry.label.as_str()).collect();

    assert_eq!(labels, vec!["Ordinary", "Deluxe", "Express"]);
}

#[test]
fn test_ac_class_and_status_keys() {
    let mut fleet = create_test_fleet(&[("A", "AC"), ("A", "Ordinary"), ("A", "Ordinary")]);
    fleet[2].status = BusStatus::Other("Scrapped".to_string());

    let ac = count_by(&fleet, GroupKey::AcClass);
    assert_eq!(ac.get("AC"), 1);
    assert_eq!(ac.get("NonAC"), 2);

    let status = count_by(&fleet, GroupKey::Status);
    assert_eq!(status.get("Active"), 2);
    assert_eq!(status.get("Scrapped"), 1);
}

#[test]
fn test_count_by_with_selector() {
    let fleet = create_mixed_fleet(40);
    let by_make = count_by_with(&fleet, |bus| bus.make.to_uppercase());

    assert_eq!(by_make.get("LEYLAND"), 10);
    assert_eq!(by_make.get("ASHOK"), 30);
    assert_eq!(by_make.total(), 40);
}

#[test]
fn test_grouped_count_serializes_as_ordered_map() {
    let mut counts = GroupedCount::new();
    counts.increment("Ordinary");
    counts.increment("AC");
    counts.increment("Ordinary");

    let json = serde_json::to_string(&counts).unwrap();
    assert_eq!(json, r#"{"Ordinary":2,"AC":1}"#);
}

#[test]
fn test_group_key_from_str() {
    assert_eq!("depot".parse::<GroupKey>().unwrap(), GroupKey::Depot);
    assert_eq!("service_type".parse::<GroupKey>().unwrap(), GroupKey::ServiceType);
    assert_eq!("Service".parse::<GroupKey>().unwrap(), GroupKey::ServiceType);
    assert_eq!("ac".parse::<GroupKey>().unwrap(), GroupKey::AcClass);
    assert!("colour".parse::<GroupKey>().is_err());
}

#[test]
fn test_single_bus_label() {
    let bus = create_test_bus(0, "Adyar", "AC(EV)");
    assert_eq!(GroupKey::Depot.label(&bus), "Adyar");
    assert_eq!(GroupKey::AcClass.label(&bus), "AC");
}
