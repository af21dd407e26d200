//! Random selection and shuffling.
//!
//! Every function takes the generator explicitly; see
//! [`extkit_foundation::random`] for ready-made sources.

use extkit_foundation::{Error, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one element of `source` uniformly at random.
///
/// Uses reservoir sampling: a single pass with constant extra space, so the
/// source need not be materialized or support random access. The `i`-th
/// element (1-based) replaces the held candidate with probability `1/i`.
///
/// # Errors
///
/// Returns an empty sequence error when `source` yields nothing.
pub fn select_random<I, R>(source: I, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut selected = None;
    for (seen, item) in (1u64..).zip(source) {
        if rng.gen_range(0..seen) == 0 {
            selected = Some(item);
        }
    }
    selected.ok_or_else(|| {
        tracing::trace!("select_random on empty sequence");
        Error::empty_sequence().in_operation("select_random")
    })
}

/// Picks one element of a slice uniformly at random with a single draw.
///
/// # Errors
///
/// Returns an empty sequence error when `list` is empty.
pub fn choose_random<'a, T, R>(list: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    if list.is_empty() {
        return Err(Error::empty_sequence().in_operation("choose_random"));
    }
    Ok(&list[rng.gen_range(0..list.len())])
}

/// Collects `source` into a vector in uniformly random order.
///
/// Unlike sorting, two calls with different generator states give different
/// orders.
pub fn randomize<I, R>(source: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut items: Vec<I::Item> = source.into_iter().collect();
    items.shuffle(rng);
    items
}
