//! Integration tests for chunking and windowing

use extkit::sequence::{SequenceExt, nullable};
use proptest::prelude::*;

#[test]
fn chunks_are_lazy() {
    // An infinite source only works if chunks are pulled on demand.
    let first_two: Vec<Vec<u32>> = (0..).chunked(3).unwrap().take(2).collect();
    assert_eq!(first_two, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn chunk_size_zero_is_rejected() {
    let err = [1, 2, 3].into_iter().chunked(0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn empty_source_has_no_chunks() {
    assert_eq!(std::iter::empty::<u8>().chunked(4).unwrap().count(), 0);
}

#[test]
fn take_until_and_slice() {
    let lines = ["header", "row 1", "row 2", "---", "footer"];
    let body: Vec<_> = lines.into_iter().skip(1).take_until(|l| *l == "---").collect();
    assert_eq!(body, vec!["row 1", "row 2"]);

    let window: Vec<_> = (10..20).slice(3, 4).collect();
    assert_eq!(window, vec![13, 14, 15, 16]);
}

#[test]
fn absent_sequences() {
    assert!(nullable::is_none_or_empty::<Vec<i32>>(None));
    assert!(nullable::is_none_or_empty(Some(Vec::<i32>::new())));
    assert!(!nullable::is_none_or_empty(Some(vec![1])));
    assert_eq!(nullable::empty_if_none::<Vec<i32>>(None).count(), 0);
    assert_eq!(nullable::empty_if_none(Some(vec![1, 2])).sum::<i32>(), 3);
}

proptest! {
    #[test]
    fn chunks_reassemble_source(source in prop::collection::vec(any::<i16>(), 0..200), size in 1usize..20) {
        let chunks: Vec<Vec<i16>> = source.iter().copied().chunked(size).unwrap().collect();
        if let Some((last, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|chunk| chunk.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
        let flattened: Vec<i16> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flattened, source);
    }
}
