//! Extension traits that expose the sequence operations as methods.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::{Skip, Take};

use extkit_foundation::Result;
use rand::Rng;

use crate::chunk::{self, Chunks};
use crate::search::{self, IndicesOf};
use crate::take::{self, TakeUntil};
use crate::{join, sample, sorted};

/// Sequence operations for every iterator.
///
/// ```
/// use extkit_sequence::SequenceExt;
///
/// let chunks: Vec<Vec<i32>> = (1..=5).chunked(2).unwrap().collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
///
/// assert!([1, 2, 2, 3].into_iter().is_ordered());
/// assert_eq!(["ab", "c"].into_iter().find_min(|s| s.len()), Some("c"));
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// Splits into consecutive chunks of at most `size` elements.
    ///
    /// # Errors
    ///
    /// Returns an out of range error when `size` is zero.
    fn chunked(self, size: usize) -> Result<Chunks<Self>> {
        chunk::chunked(self, size)
    }

    /// Returns true if exactly one element remains. Pulls at most two.
    fn is_single(self) -> bool {
        search::is_single(self)
    }

    /// Returns true if the elements are in ascending natural order.
    fn is_ordered(self) -> bool
    where
        Self::Item: Ord,
    {
        sorted::is_sorted(self)
    }

    /// Returns true if the elements are in order under `compare`.
    fn is_ordered_by<F>(self, compare: F) -> bool
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        sorted::is_sorted_by(self, compare)
    }

    /// Returns the first element with the smallest key.
    fn find_min<K, F>(self, key_fn: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        search::find_min(self, key_fn)
    }

    /// Returns the first element with the largest key.
    fn find_max<K, F>(self, key_fn: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        search::find_max(self, key_fn)
    }

    /// Picks one element uniformly at random by reservoir sampling.
    ///
    /// # Errors
    ///
    /// Returns an empty sequence error when nothing remains.
    fn select_random<R>(self, rng: &mut R) -> Result<Self::Item>
    where
        R: Rng + ?Sized,
    {
        sample::select_random(self, rng)
    }

    /// Collects the elements in a uniformly random order.
    fn randomize<R>(self, rng: &mut R) -> Vec<Self::Item>
    where
        R: Rng + ?Sized,
    {
        sample::randomize(self, rng)
    }

    /// Returns the index of the first element equal to `value`.
    fn index_of<T>(self, value: &T) -> Option<usize>
    where
        Self::Item: Borrow<T>,
        T: PartialEq + ?Sized,
    {
        search::index_of(self, value)
    }

    /// Lazily yields every index whose element equals `value`.
    fn indices_of<T>(self, value: &T) -> IndicesOf<'_, Self, T>
    where
        Self::Item: Borrow<T>,
        T: PartialEq,
    {
        search::indices_of(self, value)
    }

    /// Lazily yields every index whose element is one of `values`.
    fn indices_of_any<T>(self, values: &[T]) -> IndicesOf<'_, Self, T>
    where
        Self::Item: Borrow<T>,
        T: PartialEq,
    {
        search::indices_of_any(self, values)
    }

    /// Joins the elements' `Display` output with `separator`.
    fn join_with(self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        join::join(self, separator)
    }

    /// Joins the elements with `,`.
    fn to_csv(self) -> String
    where
        Self::Item: Display,
    {
        join::to_csv(self)
    }

    /// Wraps each element in `<tag>`/`</tag>` and concatenates.
    fn wrap_each_with_tag(self, tag: &str) -> String
    where
        Self::Item: Display,
    {
        join::wrap_each_with_tag(self, tag)
    }

    /// Yields elements until one matches `end`.
    fn take_until<P>(self, end: P) -> TakeUntil<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        take::take_until(self, end)
    }

    /// Yields `count` elements starting at `start`.
    fn slice(self, start: usize, count: usize) -> Take<Skip<Self>> {
        take::slice(self, start, count)
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Random-access operations for slices.
pub trait ListExt<T> {
    /// Binary searches a list sorted by `key_fn` and returns the first element
    /// whose key equals `key`.
    ///
    /// # Errors
    ///
    /// Returns a not found error on a miss.
    fn lookup_by_key<'a, K, F>(&'a self, key_fn: F, key: &K) -> Result<&'a T>
    where
        K: Ord + std::fmt::Debug,
        F: FnMut(&'a T) -> K;

    /// Picks one element uniformly at random with a single draw.
    ///
    /// # Errors
    ///
    /// Returns an empty sequence error when the slice is empty.
    fn choose_random<R>(&self, rng: &mut R) -> Result<&T>
    where
        R: Rng + ?Sized;
}

impl<T> ListExt<T> for [T] {
    fn lookup_by_key<'a, K, F>(&'a self, key_fn: F, key: &K) -> Result<&'a T>
    where
        K: Ord + std::fmt::Debug,
        F: FnMut(&'a T) -> K,
    {
        sorted::lookup_by_key(self, key_fn, key)
    }

    fn choose_random<R>(&self, rng: &mut R) -> Result<&T>
    where
        R: Rng + ?Sized,
    {
        sample::choose_random(self, rng)
    }
}

/// In-place insertion into a sorted vector.
pub trait SortedInsert<T> {
    /// Inserts `value` at its natural-order position and returns the index.
    fn insert_sorted(&mut self, value: T) -> usize
    where
        T: Ord;

    /// Inserts `value` at its position under `compare` and returns the index.
    fn insert_sorted_by<F>(&mut self, value: T, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Inserts `value` at its position by `key_fn` and returns the index.
    fn insert_sorted_by_key<K, F>(&mut self, value: T, key_fn: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

impl<T> SortedInsert<T> for Vec<T> {
    fn insert_sorted(&mut self, value: T) -> usize
    where
        T: Ord,
    {
        sorted::insert_sorted(self, value)
    }

    fn insert_sorted_by<F>(&mut self, value: T, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sorted::insert_sorted_by(self, value, compare)
    }

    fn insert_sorted_by_key<K, F>(&mut self, value: T, key_fn: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        sorted::insert_sorted_by_key(self, value, key_fn)
    }
}
