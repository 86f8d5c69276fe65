//! Pattern matching over a suffix array
//!
//! All suffixes that start with a pattern occupy one contiguous range of the
//! suffix array, found with two binary searches in O(m log n).

use super::builder::SuffixArray;
use super::types::Symbol;
use crate::index::types::OccurrenceSet;
use std::cmp::Ordering;
use std::ops::Range;

/// Borrowing view of a text and its suffix array.
///
/// The matcher cannot outlive the text it searches.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a, T> {
    text: &'a [T],
    suffixes: &'a [usize],
}

impl<'a, T: Symbol> Matcher<'a, T> {
    pub fn new(text: &'a [T], suffix_array: &'a SuffixArray) -> Self {
        debug_assert_eq!(text.len(), suffix_array.len());
        Self {
            text,
            suffixes: suffix_array.entries(),
        }
    }

    /// Compare `pattern` with the first `pattern.len()` symbols of the suffix
    /// at `offset`. A suffix shorter than the pattern never matches: the
    /// pattern then compares greater.
    fn compare(&self, pattern: &[T], offset: usize) -> Ordering {
        let suffix = &self.text[offset..];
        let len = pattern.len().min(suffix.len());
        match pattern[..len].cmp(&suffix[..len]) {
            Ordering::Equal if suffix.len() < pattern.len() => Ordering::Greater,
            ord => ord,
        }
    }

    /// First slot whose suffix is not smaller than the pattern
    fn lower_bound(&self, pattern: &[T]) -> usize {
        self.suffixes
            .partition_point(|&offset| self.compare(pattern, offset) == Ordering::Greater)
    }

    /// First slot whose suffix is strictly greater than the pattern
    fn upper_bound(&self, pattern: &[T], start: usize) -> usize {
        start
            + self.suffixes[start..]
                .partition_point(|&offset| self.compare(pattern, offset) != Ordering::Less)
    }

    /// Range of suffix array slots whose suffixes start with `pattern`
    pub fn search(&self, pattern: &[T]) -> Range<usize> {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return 0..0;
        }
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        lo..hi
    }

    /// All offsets where `pattern` occurs, ascending
    pub fn find_all(&self, pattern: &[T]) -> OccurrenceSet {
        let range = self.search(pattern);
        OccurrenceSet::from_unsorted(self.suffixes[range].to_vec())
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[T]) -> usize {
        self.search(pattern).len()
    }

    /// Check if `pattern` occurs at all
    pub fn exists(&self, pattern: &[T]) -> bool {
        !self.search(pattern).is_empty()
    }
}
