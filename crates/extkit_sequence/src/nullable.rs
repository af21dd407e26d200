//! Variants of the sequence operations for inputs that may be absent.
//!
//! Callers holding an `Option` of a collection can pass it straight through;
//! an absent input is reported as a missing input error instead of being
//! unwrapped at the call site.

use std::cmp::Ordering;

use extkit_foundation::{Result, require};
use rand::Rng;

use crate::{sample, search, sorted};

/// [`sorted::insert_sorted`] for a list that may be absent.
///
/// # Errors
///
/// Returns a missing input error when `list` is `None`.
pub fn insert_sorted<T: Ord>(list: Option<&mut Vec<T>>, value: T) -> Result<usize> {
    let list = require(list, "list")?;
    Ok(sorted::insert_sorted(list, value))
}

/// [`sorted::insert_sorted_by`] for a list that may be absent.
///
/// # Errors
///
/// Returns a missing input error when `list` is `None`.
pub fn insert_sorted_by<T, F>(list: Option<&mut Vec<T>>, value: T, compare: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let list = require(list, "list")?;
    Ok(sorted::insert_sorted_by(list, value, compare))
}

/// [`sample::select_random`] for a sequence that may be absent.
///
/// # Errors
///
/// Returns a missing input error when `source` is `None`, and an empty
/// sequence error when it yields nothing.
pub fn select_random<I, R>(source: Option<I>, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    sample::select_random(require(source, "sequence")?, rng)
}

/// [`search::is_single`] for a sequence that may be absent.
///
/// # Errors
///
/// Returns a missing input error when `source` is `None`.
pub fn is_single<I: IntoIterator>(source: Option<I>) -> Result<bool> {
    Ok(search::is_single(require(source, "source")?))
}

/// Returns true when `source` is absent or yields nothing.
pub fn is_none_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    source.is_none_or(|source| source.into_iter().next().is_none())
}

/// Returns the elements of `source`, or nothing when it is absent.
pub fn empty_if_none<I: IntoIterator>(source: Option<I>) -> std::iter::Flatten<std::option::IntoIter<I>> {
    source.into_iter().flatten()
}
