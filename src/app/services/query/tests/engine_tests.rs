//! Tests for query evaluation and pagination

use super::*;
use crate::app::services::query::{
    FleetFilters, QueryParams, RecordSort, RecordSortField, query,
};
use crate::models::SortDirection;

fn params(page: usize, page_size: usize) -> QueryParams {
    QueryParams::new(FleetFilters::new(), None, page, page_size).unwrap()
}

#[test]
fn test_fifty_two_records_in_pages_of_25() {
    let fleet = create_mixed_fleet(52);

    let first = query(&fleet, &params(1, 25));
    assert_eq!(first.windowed.len(), 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.filtered_count, 52);

    let third = query(&fleet, &params(3, 25));
    assert_eq!(third.windowed.len(), 2);
    assert_eq!(third.showing_range(), Some((51, 52)));
}

#[test]
fn test_out_of_range_page_is_empty() {
    let fleet = create_mixed_fleet(52);

    let beyond = query(&fleet, &params(4, 25));
    assert!(beyond.windowed.is_empty());
    assert_eq!(beyond.filtered_count, 52);
    assert_eq!(beyond.showing_range(), None);

    let zero = query(&fleet, &params(0, 25));
    assert!(zero.windowed.is_empty());
}

#[test]
fn test_window_length_matches_remaining() {
    let fleet = create_mixed_fleet(137);
    for page_size in [1, 7, 25, 50, 100, 200] {
        for page in 1..=8 {
            let result = query(&fleet, &params(page, page_size));
            let remaining = result.filtered_count.saturating_sub((page - 1) * page_size);
            assert_eq!(result.windowed.len(), page_size.min(remaining));
        }
    }
}

#[test]
fn test_pages_cover_filtered_sequence() {
    let fleet = create_mixed_fleet(211);
    let filters = FleetFilters::new().with_search("ashok");
    let sort = Some(RecordSort::new(RecordSortField::Depot, SortDirection::Desc));

    for page_size in [10, 25, 50] {
        let base = QueryParams::new(filters.clone(), sort, 1, page_size).unwrap();
        let everything = query(&fleet, &base.with_page_size(fleet.len()).unwrap());

        let mut stitched = Vec::new();
        let total = query(&fleet, &base).total_pages;
        for page in 1..=total {
            stitched.extend(query(&fleet, &base.with_page(page)).windowed);
        }

        assert_eq!(ids(&stitched), ids(&everything.windowed));
        assert_eq!(stitched.len(), everything.filtered_count);
    }
}

#[test]
fn test_no_matches() {
    let fleet = create_mixed_fleet(30);
    let none = QueryParams::default().with_filters(FleetFilters::new().with_depot("Nowhere"));
    let result = query(&fleet, &none);

    assert_eq!(result.filtered_count, 0);
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.displayed_total_pages(), 1);
    assert!(!result.has_next());
    assert!(!result.has_previous());
}

#[test]
fn test_no_sort_keeps_parse_order() {
    let fleet = create_mixed_fleet(40);
    let result = query(&fleet, &params(1, 100));
    let expected: Vec<_> = fleet.iter().map(|bus| bus.id).collect();

    assert_eq!(ids(&result.windowed), expected);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let fleet = create_test_fleet(&[
        ("Tambaram", "AC"),
        ("Adyar", "AC"),
        ("Tambaram", "Ordinary"),
        ("Adyar", "Deluxe"),
    ]);
    let sorted = QueryParams::default()
        .with_sort(Some(RecordSort::ascending(RecordSortField::Depot)));
    let result = query(&fleet, &sorted);

    assert_eq!(
        ids(&result.windowed),
        vec![RecordId(1), RecordId(3), RecordId(0), RecordId(2)]
    );
}

#[test]
fn test_query_does_not_mutate_source() {
    let fleet = create_mixed_fleet(60);
    let snapshot = fleet.clone();
    let sorted = QueryParams::default()
        .with_sort(Some(RecordSort::new(RecordSortField::Make, SortDirection::Desc)));

    let _ = query(&fleet, &sorted);
    assert_eq!(fleet, snapshot);
}

#[test]
fn test_builders_reset_page() {
    let on_page_three = QueryParams::default().with_page(3);
    assert_eq!(on_page_three.page(), 3);

    assert_eq!(on_page_three.with_filters(FleetFilters::new().with_search("x")).page(), 1);
    assert_eq!(on_page_three.with_sort(None).page(), 1);
    assert_eq!(on_page_three.with_page_size(50).unwrap().page(), 1);
    assert_eq!(on_page_three.with_page(2).page(), 2);
}

#[test]
fn test_zero_page_size_is_rejected() {
    assert!(QueryParams::new(FleetFilters::new(), None, 1, 0).is_err());
    assert!(QueryParams::default().with_page_size(0).is_err());
}

#[test]
fn test_navigation_helpers() {
    let fleet = create_mixed_fleet(52);

    let first = query(&fleet, &params(1, 25));
    assert_eq!(first.previous_page(), 1);
    assert_eq!(first.next_page(), 2);
    assert!(first.has_next());
    assert!(!first.has_previous());

    let last = query(&fleet, &params(3, 25));
    assert_eq!(last.next_page(), 3);
    assert_eq!(last.previous_page(), 2);
    assert!(!last.has_next());
}

#[test]
fn test_navigation_from_huge_page_stays_in_range() {
    let fleet = create_mixed_fleet(52);
    let result = query(&fleet, &params(usize::MAX, 25));

    assert!(result.windowed.is_empty());
    assert_eq!(result.showing_range(), None);
    assert_eq!(result.next_page(), 3);
    assert_eq!(result.previous_page(), usize::MAX - 1);
    assert!(!result.has_next());
    assert!(result.has_previous());
}
