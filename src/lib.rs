//! extkit - Extension helpers for everyday Rust values
//!
//! This crate re-exports all layers of extkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: extkit_sequence   - Chunking, sorted insert, sampling, searching
//!          extkit_text       - String, number and enum helpers
//!          extkit_time       - Date differences and date ranges
//! Layer 0: extkit_foundation - Error types and random sources
//! ```

pub use extkit_foundation as foundation;
pub use extkit_sequence as sequence;
pub use extkit_text as text;
pub use extkit_time as time;
