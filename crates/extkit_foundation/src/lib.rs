//! Error types and random sources shared by the extkit layers.
//!
//! This crate provides:
//! - [`Error`] - Error type with a categorized [`ErrorKind`] and optional context
//! - [`Result`] - Result alias used by every layer
//! - [`random`] - Seedable generators, thread-local and shared

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod random;

pub use error::{Error, ErrorContext, ErrorKind, Result, require};
pub use random::{RandomConfig, SharedRng, reseed_thread_rng, with_thread_rng};
