//! Random sources for the sampling helpers.
//!
//! Randomised operations never reach for a hidden global generator: they take
//! `&mut impl Rng`. This module supplies the generators callers usually want
//! to pass in.

use std::cell::RefCell;
use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for building a generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomConfig {
    /// Fixed seed for reproducible output. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Creates a configuration that seeds from OS entropy.
    #[must_use]
    pub fn entropy() -> Self {
        Self::default()
    }

    /// Creates a configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Builder method to set or clear the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds a fresh generator from this configuration.
    #[must_use]
    pub fn build(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "seeding generator");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

thread_local! {
    static THREAD_RNG: RefCell<ChaCha8Rng> = RefCell::new(ChaCha8Rng::from_entropy());
}

/// Runs `f` with this thread's generator.
///
/// Each thread owns an independent entropy-seeded generator, so no locking is
/// involved.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_thread_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Reseeds this thread's generator, making later draws reproducible.
pub fn reseed_thread_rng(config: RandomConfig) {
    THREAD_RNG.with(|rng| *rng.borrow_mut() = config.build());
}

/// A generator that can be shared between threads.
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SharedRng {
    /// Creates a shared generator from a configuration.
    #[must_use]
    pub fn new(config: RandomConfig) -> Self {
        Self {
            inner: Mutex::new(config.build()),
        }
    }

    /// Creates a shared generator with a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomConfig::seeded(seed))
    }

    /// Runs `f` while holding the generator lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        // The generator holds no invariant a panicking holder could break.
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Replaces the generator state.
    pub fn reseed(&self, config: RandomConfig) {
        self.with(|rng| *rng = config.build());
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new(RandomConfig::entropy())
    }
}
