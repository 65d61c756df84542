//! Tests for pagination module

use super::*;
use crate::types::User;
use std::sync::Arc;
use test_case::test_case;

fn users(count: usize) -> Arc<[User]> {
    (1..=count as u64)
        .map(|id| User::new(id, format!("user{id}")))
        .collect()
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

#[test_case(0, 10 => 0; "no records")]
#[test_case(1, 10 => 1; "single record")]
#[test_case(10, 10 => 1; "exactly one page")]
#[test_case(11, 10 => 2; "one over")]
#[test_case(23, 10 => 3; "partial last page")]
#[test_case(208, 10 => 21; "full endpoint")]
#[test_case(5, 0 => 0; "zero page size")]
fn test_total_pages(count: usize, size: usize) -> usize {
    total_pages(count, size)
}

#[test]
fn test_page_numbers() {
    assert_eq!(page_numbers(23, 10), vec![1, 2, 3]);
    assert!(page_numbers(0, 10).is_empty());
}

#[test_case(23, 1 => 0..10; "first page")]
#[test_case(23, 2 => 10..20; "middle page")]
#[test_case(23, 3 => 20..23; "short last page")]
#[test_case(23, 4 => 23..23; "past the end")]
#[test_case(23, 0 => 0..0; "page zero")]
#[test_case(0, 1 => 0..0; "empty collection")]
#[test_case(23, usize::MAX => 23..23; "huge page does not overflow")]
fn test_page_bounds(count: usize, page: usize) -> std::ops::Range<usize> {
    page_bounds(count, page, 10)
}

#[test]
fn test_page_bounds_lengths_for_all_valid_pages() {
    for count in 0..=45 {
        for page in 1..=total_pages(count, 10) {
            let bounds = page_bounds(count, page, 10);
            assert_eq!(bounds.start, (page - 1) * 10);
            assert_eq!(bounds.len(), 10.min(count - (page - 1) * 10));
        }
    }
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_starts_on_first_page() {
    let paginator: Paginator = Paginator::new(10);
    assert_eq!(paginator.current_page(), 1);
    assert_eq!(paginator.page_size(), 10);
}

#[test]
fn test_paginator_visible_slices() {
    let records = users(23);
    let mut paginator = Paginator::new(10);

    assert_eq!(paginator.visible(&records), &records[0..10]);

    paginator.set_page(3);
    let visible = paginator.visible(&records);
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[0].first_name, "user21");
}

#[test]
fn test_paginator_out_of_range_is_unguarded() {
    let records = users(23);
    let mut paginator = Paginator::new(10);

    paginator.set_page(9);
    assert_eq!(paginator.current_page(), 9);
    assert!(paginator.visible(&records).is_empty());

    paginator.set_page(0);
    assert_eq!(paginator.current_page(), 0);
    assert!(paginator.visible(&records).is_empty());
}

#[test]
fn test_paginator_memoizes_window() {
    let records = users(23);
    let mut paginator = Paginator::new(10);

    paginator.visible(&records);
    paginator.visible(&records);
    assert_eq!(paginator.window_computations(), 1);

    paginator.set_page(2);
    paginator.visible(&records);
    assert_eq!(paginator.window_computations(), 2);

    // Same page, same collection: cached
    paginator.set_page(2);
    paginator.visible(&records);
    assert_eq!(paginator.window_computations(), 2);

    // Equal contents but a different collection: recomputed
    let replaced = users(23);
    paginator.visible(&replaced);
    assert_eq!(paginator.window_computations(), 3);
}

#[test]
fn test_paginator_memoizes_page_numbers() {
    let mut paginator: Paginator = Paginator::new(10);

    assert_eq!(paginator.page_numbers(23), &[1, 2, 3]);
    paginator.set_page(2);
    assert_eq!(paginator.page_numbers(23), &[1, 2, 3]);
    assert_eq!(paginator.pages_computations(), 1);

    assert!(paginator.page_numbers(0).is_empty());
    assert_eq!(paginator.pages_computations(), 2);
}

#[test]
fn test_paginator_page_not_clamped_when_collection_shrinks() {
    let mut paginator = Paginator::new(10);
    paginator.set_page(3);

    let shrunk = users(12);
    assert!(paginator.visible(&shrunk).is_empty());
    assert_eq!(paginator.current_page(), 3);
}
