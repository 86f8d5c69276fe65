//! Suffix array builder
//!
//! Builds a suffix array and its LCP array from a sequence of symbols by:
//! 1. Sorting all suffixes, by SA-IS or by a comparison sort for short input
//! 2. Inverting the permutation and running Kasai's LCP scan
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::lcp::{inverse, kasai};
use super::sais::induced_sort;
use super::types::*;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sorted suffix offsets plus their LCP array and inverse permutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixArray {
    entries: Vec<usize>,
    lcp: Vec<usize>,
    rank: Vec<usize>,
}

impl SuffixArray {
    /// Offsets of all suffixes in lexicographic order
    #[inline]
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// `lcp()[i]` is the common prefix length of suffixes `entries()[i - 1]`
    /// and `entries()[i]`; `lcp()[0]` is 0
    #[inline]
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Inverse permutation: `rank()[entries()[i]] == i`
    #[inline]
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing suffix arrays
pub struct SuffixArrayBuilder {
    config: IndexConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(IndexConfig::default())
    }

    /// Build the suffix array and LCP array for `text`
    pub fn build<T: Symbol>(&self, text: &[T]) -> SuffixArray {
        let n = text.len();
        if n == 0 {
            return SuffixArray::default();
        }

        let started = Instant::now();
        let alphabet_size = text.iter().map(|c| c.index() + 1).max().unwrap_or(0);
        let algorithm = self.config.algorithm_for(n);

        let entries = match algorithm {
            BuildAlgorithm::Comparison => comparison_sort(text),
            _ => induced_sort(text, alphabet_size),
        };
        let rank = inverse(&entries);
        let lcp = kasai(text, &entries, &rank);

        log::debug!(
            "built suffix array: n={}, alphabet={}, algorithm={:?}, elapsed={:?}",
            n,
            alphabet_size,
            algorithm,
            started.elapsed()
        );

        SuffixArray { entries, lcp, rank }
    }
}

/// Sort suffix offsets by comparing the suffixes they point to.
///
/// Time: O(n log n) comparisons, each up to O(n) symbols
fn comparison_sort<T: Symbol>(text: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();

    #[cfg(feature = "parallel")]
    if text.len() > 100_000 {
        sa.par_sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}
