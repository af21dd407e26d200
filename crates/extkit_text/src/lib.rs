//! String, number and enum helpers for extkit.
//!
//! Functions are grouped by concern:
//! - [`predicates`] - numeric, character-class and length checks
//! - [`convert`] - string to value conversions and blank handling
//! - [`affix`] - prefix and suffix handling, optionally case-insensitive
//! - [`edit`] - slicing, counting and removal
//! - [`case`] - capitalization and camel-case splitting
//! - [`mask`] - masking and formatting of emails, phone numbers and slugs
//! - [`query`] - query string parsing
//! - [`number`] - optional number formatting
//! - [`enums`] - variant listing, descriptions and lenient parsing
//!
//! Lengths and positions count `char`s unless a function says otherwise.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod affix;
pub mod case;
pub mod convert;
pub mod edit;
pub mod enums;
pub mod mask;
pub mod number;
pub mod predicates;
pub mod query;

pub use mask::{MaskOptions, SlugOptions};
