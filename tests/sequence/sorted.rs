//! Integration tests for sorted insertion, order checks and key lookup

use std::cmp::Reverse;

use extkit::sequence::{ListExt, SequenceExt, SortedInsert, nullable};
use proptest::prelude::*;

// =============================================================================
// Sorted Insert
// =============================================================================

#[test]
fn insert_places_before_equal() {
    let mut list = vec![(1, 'a'), (2, 'b'), (2, 'c'), (4, 'd')];
    let index = list.insert_sorted_by_key((2, 'z'), |pair| pair.0);
    assert_eq!(index, 1);
    assert_eq!(list[1], (2, 'z'));
}

#[test]
fn insert_appends_when_largest() {
    let mut list = vec![1, 2, 3];
    assert_eq!(list.insert_sorted(9), 3);
    assert_eq!(list, vec![1, 2, 3, 9]);
}

#[test]
fn insert_with_descending_comparator() {
    let mut list = vec![9, 5, 1];
    let index = list.insert_sorted_by(4, |a, b| b.cmp(a));
    assert_eq!(index, 2);
    assert_eq!(list, vec![9, 5, 4, 1]);
}

#[test]
fn insert_into_absent_list() {
    let err = nullable::insert_sorted::<i32>(None, 1).unwrap_err();
    assert!(err.is_missing_input());

    let mut list = vec![1, 3];
    assert_eq!(nullable::insert_sorted(Some(&mut list), 2).unwrap(), 1);
}

// =============================================================================
// Order Checks
// =============================================================================

#[test]
fn ordered_examples() {
    assert!(Vec::<i32>::new().into_iter().is_ordered());
    assert!([7].into_iter().is_ordered());
    assert!(![3, 1, 2].into_iter().is_ordered());
    assert!([1, 2, 2, 3].into_iter().is_ordered());
    assert!(["c", "b", "a"].into_iter().is_ordered_by(|a, b| b.cmp(a)));
}

#[test]
fn order_check_does_not_mutate() {
    let list = vec![3, 1, 2];
    let first = list.iter().is_ordered();
    let second = list.iter().is_ordered();
    assert_eq!(first, second);
    assert_eq!(list, vec![3, 1, 2]);
}

// =============================================================================
// Key Lookup
// =============================================================================

#[test]
fn lookup_hit_and_miss() {
    let list = [(1, "a"), (3, "b"), (5, "c")];
    assert_eq!(list.lookup_by_key(|pair| pair.0, &3).unwrap(), &(3, "b"));
    assert!(list.lookup_by_key(|pair| pair.0, &4).unwrap_err().is_not_found());
}

#[test]
fn lookup_returns_first_duplicate() {
    let list = [(1, 'a'), (2, 'b'), (2, 'c'), (2, 'd'), (3, 'e')];
    assert_eq!(list.lookup_by_key(|pair| pair.0, &2).unwrap(), &(2, 'b'));
}

#[test]
fn lookup_by_descending_key() {
    let list = [9, 7, 4, 2];
    assert_eq!(list.lookup_by_key(|n| Reverse(*n), &Reverse(4)).unwrap(), &4);
}

proptest! {
    #[test]
    fn insert_keeps_order(mut list in prop::collection::vec(-50i32..50, 0..64), value in -60i32..60) {
        list.sort_unstable();
        let before = list.len();
        let index = list.insert_sorted(value);
        prop_assert_eq!(list[index], value);
        prop_assert_eq!(list.len(), before + 1);
        prop_assert!(list.iter().is_ordered());
    }

    #[test]
    fn lookup_finds_every_member(mut list in prop::collection::vec(0u16..1000, 1..64)) {
        list.sort_unstable();
        for value in &list {
            prop_assert_eq!(list.lookup_by_key(|n| *n, value).unwrap(), value);
        }
    }
}
