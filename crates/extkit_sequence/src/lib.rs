//! Chunking, sorted insertion, sampling and searching over generic sequences.
//!
//! Most operations are available two ways:
//! - as methods on any iterator through [`SequenceExt`], and on slices and
//!   vectors through [`ListExt`] and [`SortedInsert`]
//! - as free functions in the topic modules ([`chunk`], [`sorted`],
//!   [`sample`], [`search`], [`join`], [`take`])
//!
//! [`nullable`] holds the variants that accept an absent input and report it
//! as [`ErrorKind::MissingInput`](extkit_foundation::ErrorKind::MissingInput).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chunk;
mod ext;
pub mod join;
pub mod nullable;
pub mod sample;
pub mod search;
pub mod sorted;
pub mod take;

pub use chunk::Chunks;
pub use ext::{ListExt, SequenceExt, SortedInsert};
pub use search::IndicesOf;
pub use take::TakeUntil;
