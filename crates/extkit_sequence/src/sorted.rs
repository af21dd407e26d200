//! Order-aware operations: sorted insertion, sortedness checks and binary
//! search by key.
//!
//! None of these verify that their input is actually sorted. Passing an
//! unsorted list gives an unspecified (but memory-safe) result.

use std::cmp::Ordering;

use extkit_foundation::{Error, Result};

/// Inserts `value` into an ascending `list` and returns its index.
///
/// The value lands at the first position whose element is not less than it,
/// so it precedes any equal elements. When every element is smaller it is
/// appended.
pub fn insert_sorted<T: Ord>(list: &mut Vec<T>, value: T) -> usize {
    insert_sorted_by(list, value, Ord::cmp)
}

/// Inserts `value` into `list`, which must be sorted under `compare`.
///
/// See [`insert_sorted`] for where the value lands.
pub fn insert_sorted_by<T, F>(list: &mut Vec<T>, value: T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = list
        .iter()
        .position(|item| compare(&value, item) != Ordering::Greater)
        .unwrap_or(list.len());
    list.insert(index, value);
    tracing::trace!(index, len = list.len(), "inserted into sorted list");
    index
}

/// Inserts `value` into `list`, which must be sorted by `key_fn`.
pub fn insert_sorted_by_key<T, K, F>(list: &mut Vec<T>, value: T, mut key_fn: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    insert_sorted_by(list, value, |a, b| key_fn(a).cmp(&key_fn(b)))
}

/// Returns true if `source` is in ascending natural order.
pub fn is_sorted<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: Ord,
{
    is_sorted_by(source, |a, b| a.cmp(b))
}

/// Returns true if every adjacent pair `(a, b)` satisfies `compare(a, b) <= 0`.
///
/// Empty and single-element sequences are sorted. Stops at the first
/// out-of-order pair.
pub fn is_sorted_by<I, F>(source: I, mut compare: F) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = source.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for current in iter {
        if compare(&prev, &current) == Ordering::Greater {
            return false;
        }
        prev = current;
    }
    true
}

/// Binary searches a list sorted ascending by `key_fn` for `key`.
///
/// Returns the first element whose key equals `key`.
///
/// # Errors
///
/// Returns a not found error when no element has the key.
pub fn lookup_by_key<'a, T, K, F>(list: &'a [T], mut key_fn: F, key: &K) -> Result<&'a T>
where
    K: Ord + std::fmt::Debug,
    F: FnMut(&'a T) -> K,
{
    // Lower bound: the first index whose key is not less than `key`.
    let mut low = 0;
    let mut high = list.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if key_fn(&list[mid]) < *key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    match list.get(low) {
        Some(item) if key_fn(item) == *key => Ok(item),
        _ => {
            tracing::trace!(?key, len = list.len(), "binary search miss");
            Err(Error::not_found(format!("no element with key {key:?}")).in_operation("lookup_by_key"))
        }
    }
}
