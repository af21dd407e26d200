//! Integration tests for random selection and shuffling

use extkit::foundation::RandomConfig;
use extkit::sequence::{ListExt, SequenceExt, nullable};

const TRIALS: usize = 30_000;

#[test]
fn single_element_always_selected() {
    let mut rng = RandomConfig::seeded(1).build();
    for _ in 0..100 {
        assert_eq!(std::iter::once("only").select_random(&mut rng).unwrap(), "only");
    }
}

#[test]
fn empty_selection_fails() {
    let mut rng = RandomConfig::seeded(1).build();
    let err = std::iter::empty::<u8>().select_random(&mut rng).unwrap_err();
    assert!(err.is_invalid_argument());

    let empty: [u8; 0] = [];
    assert!(empty.choose_random(&mut rng).unwrap_err().is_invalid_argument());
}

#[test]
fn absent_selection_fails() {
    let mut rng = RandomConfig::seeded(1).build();
    let err = nullable::select_random::<Vec<u8>, _>(None, &mut rng).unwrap_err();
    assert!(err.is_missing_input());
}

#[test]
fn reservoir_selection_is_uniform() {
    let mut rng = RandomConfig::seeded(2024).build();
    let mut counts = [0usize; 3];
    for _ in 0..TRIALS {
        let picked = [1, 2, 3].into_iter().select_random(&mut rng).unwrap();
        counts[picked - 1] += 1;
    }
    let expected = TRIALS / 3;
    for count in counts {
        assert!(count.abs_diff(expected) < TRIALS / 20, "{counts:?}");
    }
}

#[test]
fn indexed_selection_is_uniform() {
    let mut rng = RandomConfig::seeded(77).build();
    let list = ['a', 'b', 'c'];
    let mut counts = [0usize; 3];
    for _ in 0..TRIALS {
        let picked = list.choose_random(&mut rng).unwrap();
        counts[(*picked as u8 - b'a') as usize] += 1;
    }
    let expected = TRIALS / 3;
    for count in counts {
        assert!(count.abs_diff(expected) < TRIALS / 20, "{counts:?}");
    }
}

#[test]
fn randomize_is_permutation() {
    let mut rng = RandomConfig::seeded(3).build();
    let mut shuffled = (0..50).randomize(&mut rng);
    assert_eq!(shuffled.len(), 50);
    shuffled.sort_unstable();
    assert_eq!(shuffled, (0..50).collect::<Vec<_>>());
}

#[test]
fn seeded_selection_repeats() {
    let pick = |seed| {
        let mut rng = RandomConfig::seeded(seed).build();
        (0..1000).select_random(&mut rng).unwrap()
    };
    assert_eq!(pick(42), pick(42));
}
