//! Prefix and window adapters.

use std::iter::{FusedIterator, Skip, Take};

/// Iterator that yields elements until one satisfies the end condition.
///
/// The matching element is consumed but not yielded. Created by
/// [`take_until`].
#[derive(Debug, Clone)]
pub struct TakeUntil<I, P> {
    iter: I,
    end: P,
    done: bool,
}

/// Yields elements of `source` up to, but excluding, the first one for which
/// `end` returns true.
pub fn take_until<I, P>(source: I, end: P) -> TakeUntil<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeUntil {
        iter: source.into_iter(),
        end,
        done: false,
    }
}

impl<I, P> Iterator for TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if !(self.end)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Yields `count` elements of `source` starting at index `start`.
pub fn slice<I: IntoIterator>(source: I, start: usize, count: usize) -> Take<Skip<I::IntoIter>> {
    source.into_iter().skip(start).take(count)
}
