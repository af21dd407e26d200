//! Date difference and date range helpers for extkit.
//!
//! This crate provides:
//! - [`DatePart`] - SQL-style date parts with their usual abbreviations
//! - [`date_diff`] - Difference between two timestamps in a given part
//! - [`date_range`] - Lazy inclusive iterator over calendar dates

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diff;
pub mod range;

pub use diff::{DatePart, date_diff};
pub use range::{DateRange, date_range};
