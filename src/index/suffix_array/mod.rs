//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays
//! built in linear time.
//!
//! ## Architecture
//!
//! - `builder`: Constructs suffix arrays (SA-IS or comparison sort) and LCP arrays
//! - `sais`: The induced-sorting construction
//! - `lcp`: Kasai's LCP scan
//! - `matcher`: Binary-search pattern matching
//! - `types`: Configuration and the symbol abstraction

pub mod builder;
mod lcp;
pub mod matcher;
mod sais;
pub mod types;

// Re-exports for convenience
pub use builder::{SuffixArray, SuffixArrayBuilder};
pub use matcher::Matcher;
pub use types::{BuildAlgorithm, DEFAULT_MAX_DISTANCE, IndexConfig, Symbol};
