//! Searching unsorted sequences: singularity, extremes by key and index
//! lookup.

use std::borrow::Borrow;
use std::iter::{Enumerate, FusedIterator};

/// Returns true if `source` yields exactly one element.
///
/// Pulls at most two elements.
pub fn is_single<I: IntoIterator>(source: I) -> bool {
    let mut iter = source.into_iter();
    iter.next().is_some() && iter.next().is_none()
}

/// Returns the element with the smallest key, or `None` for an empty source.
///
/// Ties resolve to the first occurrence.
pub fn find_min<I, K, F>(source: I, key_fn: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    find_best(source, key_fn, |candidate, best| candidate < best)
}

/// Returns the element with the largest key, or `None` for an empty source.
///
/// Ties resolve to the first occurrence.
pub fn find_max<I, K, F>(source: I, key_fn: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    find_best(source, key_fn, |candidate, best| candidate > best)
}

fn find_best<I, K, F, B>(source: I, mut key_fn: F, mut beats: B) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    B: FnMut(&K, &K) -> bool,
{
    let mut iter = source.into_iter();
    let mut best = iter.next()?;
    let mut best_key = key_fn(&best);
    for item in iter {
        let key = key_fn(&item);
        if beats(&key, &best_key) {
            best = item;
            best_key = key;
        }
    }
    Some(best)
}

/// Returns the index of the first element equal to `value`.
pub fn index_of<I, T>(source: I, value: &T) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    source.into_iter().position(|item| item.borrow() == value)
}

/// Lazily yields, in ascending order, every index whose element equals
/// `value`.
pub fn indices_of<I, T>(source: I, value: &T) -> IndicesOf<'_, I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq,
{
    indices_of_any(source, std::slice::from_ref(value))
}

/// Lazily yields, in ascending order, every index whose element is one of
/// `values`.
pub fn indices_of_any<I, T>(source: I, values: &[T]) -> IndicesOf<'_, I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq,
{
    IndicesOf {
        iter: source.into_iter().enumerate(),
        targets: values,
    }
}

/// Iterator over the indices of matching elements.
///
/// Created by [`indices_of`] and [`indices_of_any`]. Consumes the source once.
#[derive(Debug, Clone)]
pub struct IndicesOf<'a, I, T> {
    iter: Enumerate<I>,
    targets: &'a [T],
}

impl<I, T> Iterator for IndicesOf<'_, I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: PartialEq,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let targets = self.targets;
        self.iter
            .find(|(_, item)| targets.contains(item.borrow()))
            .map(|(index, _)| index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> FusedIterator for IndicesOf<'_, I, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    T: PartialEq,
{
}
