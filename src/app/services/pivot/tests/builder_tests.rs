//! Tests for pivot accumulation and totals

use super::*;
use crate::app::services::aggregator::{GroupKey, count_by};
use crate::app::services::pivot::{PivotSort, build_pivot};

#[test]
fn test_depot_by_service_cells() {
    let fleet = create_test_fleet(&[
        ("Adyar", "AC"),
        ("Adyar", "Ordinary"),
        ("Adyar", "Ordinary"),
        ("Tambaram", "Deluxe"),
    ]);
    let pivot = depot_pivot(&fleet);

    assert_eq!(pivot.cell("Adyar", "Ordinary"), 2);
    assert_eq!(pivot.cell("Adyar", "AC"), 1);
    assert_eq!(pivot.cell("Tambaram", "Deluxe"), 1);
    assert_eq!(pivot.row_total("Adyar"), 3);
    assert_eq!(pivot.column_total("Ordinary"), 2);
    assert_eq!(pivot.grand_total(), 4);
}

#[test]
fn test_absent_cells_are_zero() {
    let fleet = create_test_fleet(&[("Adyar", "AC"), ("Tambaram", "Deluxe")]);
    let pivot = depot_pivot(&fleet);

    assert_eq!(pivot.cell("Adyar", "Deluxe"), 0);
    assert_eq!(pivot.cell("Nowhere", "AC"), 0);
    assert_eq!(pivot.row_total("Nowhere"), 0);
    assert_eq!(pivot.column_total("Express"), 0);
}

#[test]
fn test_empty_input() {
    let pivot = depot_pivot(&[]);

    assert!(pivot.is_empty());
    assert!(pivot.column_keys().is_empty());
    assert_eq!(pivot.grand_total(), 0);
    assert!(pivot.view(&PivotSort::default()).rows.is_empty());
}

#[test]
fn test_column_keys_are_sorted_by_code_point() {
    let fleet = create_test_fleet(&[
        ("A", "Ordinary"),
        ("A", "express"),
        ("A", "AC(EV)"),
        ("A", "Deluxe"),
        ("A", "AC"),
        ("A", "Ordinary"),
    ]);
    let pivot = depot_pivot(&fleet);

    assert_eq!(
        pivot.column_keys(),
        &["AC", "AC(EV)", "Deluxe", "Ordinary", "express"]
    );
}

#[test]
fn test_column_order_ignores_input_order() {
    let fleet = create_mixed_fleet(90);
    let mut reversed = fleet.clone();
    reversed.reverse();

    assert_eq!(
        depot_pivot(&fleet).column_keys(),
        depot_pivot(&reversed).column_keys()
    );
}

#[test]
fn test_totals_are_consistent() {
    for size in [0, 1, 13, 52, 500] {
        let fleet = create_mixed_fleet(size);
        let pivot = depot_pivot(&fleet);

        let row_sum: usize = pivot.rows().iter().map(|row| row.total).sum();
        let column_sum: usize = pivot
            .column_keys()
            .iter()
            .map(|column| pivot.column_total(column))
            .sum();

        assert_eq!(pivot.grand_total(), fleet.len());
        assert_eq!(row_sum, fleet.len());
        assert_eq!(column_sum, fleet.len());

        for row in pivot.rows() {
            let cells: usize = pivot.column_keys().iter().map(|c| row.count(c)).sum();
            assert_eq!(cells, row.total);
        }
    }
}

#[test]
fn test_row_totals_match_aggregator() {
    let fleet = create_mixed_fleet(200);
    let pivot = depot_pivot(&fleet);
    let by_depot = count_by(&fleet, GroupKey::Depot);

    for entry in by_depot.iter() {
        assert_eq!(pivot.row_total(&entry.label), entry.count);
    }
    assert_eq!(pivot.row_keys().len(), by_depot.len());
}

#[test]
fn test_other_dimensions() {
    let fleet = create_test_fleet(&[("Adyar", "AC"), ("Adyar", "Ordinary"), ("Tambaram", "AC")]);
    let pivot = build_pivot(&fleet, GroupKey::ServiceType, GroupKey::AcClass);

    assert_eq!(pivot.row_key(), GroupKey::ServiceType);
    assert_eq!(pivot.column_key(), GroupKey::AcClass);
    assert_eq!(pivot.column_keys(), &["AC", "NonAC"]);
    assert_eq!(pivot.cell("AC", "AC"), 2);
    assert_eq!(pivot.cell("Ordinary", "NonAC"), 1);
}

#[test]
fn test_view_aligns_cells_with_columns() {
    let fleet = create_test_fleet(&[
        ("Adyar", "Ordinary"),
        ("Tambaram", "AC"),
        ("Tambaram", "Ordinary"),
        ("Tambaram", "Ordinary"),
    ]);
    let view = depot_pivot(&fleet).view(&PivotSort::default());

    assert_eq!(view.columns, vec!["AC", "Ordinary"]);
    assert_eq!(view.rows[0].label, "Tambaram");
    assert_eq!(view.rows[0].cells, vec![1, 2]);
    assert_eq!(view.rows[0].total, 3);
    assert_eq!(view.rows[1].label, "Adyar");
    assert_eq!(view.rows[1].cells, vec![0, 1]);
    assert_eq!(view.column_totals, vec![1, 3]);
    assert_eq!(view.grand_total, 4);
}

#[test]
fn test_view_serializes() {
    let fleet = create_test_fleet(&[("Adyar", "AC")]);
    let json = serde_json::to_value(depot_pivot(&fleet).view(&PivotSort::default())).unwrap();

    assert_eq!(json["row_key"], "depot");
    assert_eq!(json["column_key"], "service-type");
    assert_eq!(json["sort"]["field"], "total");
    assert_eq!(json["sort"]["direction"], "desc");
    assert_eq!(json["grand_total"], 1);
}
