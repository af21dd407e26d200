//! Splitting a sequence into fixed-size chunks.

use std::iter::FusedIterator;

use extkit_foundation::{Error, Result};

/// Iterator over consecutive chunks of at most `size` elements.
///
/// Created by [`chunked`] or [`SequenceExt::chunked`](crate::SequenceExt::chunked).
/// The source is pulled lazily, one chunk at a time, so only the chunk being
/// built is held in memory.
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    /// Returns the configured chunk size.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

/// Partitions `source` into consecutive chunks of at most `size` elements.
///
/// Order is preserved and every chunk except possibly the last has exactly
/// `size` elements.
///
/// # Errors
///
/// Returns an out of range error when `size` is zero.
pub fn chunked<I: IntoIterator>(source: I, size: usize) -> Result<Chunks<I::IntoIter>> {
    if size == 0 {
        tracing::trace!("rejected zero chunk size");
        return Err(Error::out_of_range("chunk_size", 0, 1, i64::MAX).in_operation("chunked"));
    }
    Ok(Chunks {
        iter: source.into_iter(),
        size,
    })
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let (lower, _) = self.iter.size_hint();
        let mut chunk = Vec::with_capacity(self.size.min(lower.saturating_add(1)));
        chunk.push(first);
        chunk.extend(self.iter.by_ref().take(self.size - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}
