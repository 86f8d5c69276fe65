//! # saphrase - Suffix Array Phrase Search
//!
//! saphrase indexes an immutable block of text (ASCII or wide/CJK) with a
//! suffix array and answers boolean and proximity phrase queries against it.
//! Pattern lookup is O(m log n) after linear-time construction.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - Decoded text and the decoder seam for raw bytes
//! - [`index`] - Suffix array construction (SA-IS), LCP, matching, statistics
//! - [`query`] - Result-set algebra, grouped proximity queries, query parsing
//! - [`error`] - Error type shared by the crate
//!
//! ## Quick Start
//!
//! ```
//! use saphrase::{GroupedQuery, TextIndex, parse_query};
//!
//! let index = TextIndex::new("Romeo loves Juliet. Juliet loves Romeo.");
//! assert_eq!(index.find_all("Romeo"), [0, 33]);
//!
//! // Both words within 13 code points; each hit reports the earlier offset
//! let group = GroupedQuery::and("Romeo", "Juliet");
//! assert_eq!(index.search_group(&group, Some(13)).unwrap(), [0, 20]);
//!
//! let query = parse_query("Romeo _AND_ Juliet");
//! assert_eq!(query.words(), ["Romeo", "Juliet"]);
//! ```
//!
//! ## Query language
//!
//! Operators are keywords wrapped in underscores: `_AND_`, `_OR_`, `_NOT_`
//! (any case). Parentheses group. Words written next to each other are
//! combined with AND.
//!
//! ## Threading
//!
//! A [`TextIndex`] is read-only after construction and can be shared across
//! threads. The `parallel` feature evaluates the words of a grouped query
//! with rayon.

pub mod corpus;
pub mod error;
pub mod index;
pub mod query;

pub use corpus::{Corpus, Decoder, Latin1, Utf8, Utf8Lossy};
pub use error::{Error, Result};
pub use index::suffix_array::{
    BuildAlgorithm, IndexConfig, Matcher, SuffixArray, SuffixArrayBuilder,
};
pub use index::{IndexStats, OccurrenceSet, TextIndex, TextPosition};
pub use query::ops;
pub use query::{GroupOp, GroupedQuery, Query, QueryNode, extract_words, parse_query};
