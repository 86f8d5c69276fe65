//! Owning index over a corpus
//!
//! [`TextIndex`] keeps the corpus and its suffix array together so the
//! matcher can never refer to text that has been dropped. It is read-only
//! after construction and may be shared across threads.

use crate::corpus::{Corpus, fold_char};
use crate::error::Result;
use crate::index::stats::IndexStats;
use crate::index::suffix_array::{IndexConfig, Matcher, SuffixArray, SuffixArrayBuilder};
use crate::index::types::{OccurrenceSet, TextPosition};
use crate::query::group::GroupedQuery;
use crate::query::ops;

pub struct TextIndex {
    corpus: Corpus,
    /// Case-folded copy of the corpus when the index is case-insensitive
    folded: Option<Corpus>,
    suffix_array: SuffixArray,
    config: IndexConfig,
}

impl TextIndex {
    /// Build an index with default configuration
    pub fn new(corpus: impl Into<Corpus>) -> Self {
        Self::with_config(corpus, IndexConfig::default())
    }

    pub fn with_config(corpus: impl Into<Corpus>, config: IndexConfig) -> Self {
        let corpus = corpus.into();
        let folded = config.case_insensitive.then(|| corpus.folded());
        let text = folded.as_ref().unwrap_or(&corpus);
        let suffix_array = SuffixArrayBuilder::new(config.clone()).build(text.as_chars());

        Self {
            corpus,
            folded,
            suffix_array,
            config,
        }
    }

    /// The corpus as supplied, before any case folding
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn suffix_array(&self) -> &SuffixArray {
        &self.suffix_array
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Text the suffix array was built over
    fn indexed_text(&self) -> &[char] {
        self.folded.as_ref().unwrap_or(&self.corpus).as_chars()
    }

    /// Matcher over the indexed text. Patterns must already be folded for
    /// case-insensitive indexes; prefer [`TextIndex::find_all`].
    pub fn matcher(&self) -> Matcher<'_, char> {
        Matcher::new(self.indexed_text(), &self.suffix_array)
    }

    /// Convert a pattern to the code points the index was built over
    pub fn pattern(&self, pattern: &str) -> Vec<char> {
        if self.config.case_insensitive {
            pattern.chars().map(fold_char).collect()
        } else {
            pattern.chars().collect()
        }
    }

    /// All offsets where `pattern` occurs, ascending
    pub fn find_all(&self, pattern: &str) -> OccurrenceSet {
        self.matcher().find_all(&self.pattern(pattern))
    }

    pub fn count(&self, pattern: &str) -> usize {
        self.matcher().count(&self.pattern(pattern))
    }

    pub fn exists(&self, pattern: &str) -> bool {
        self.matcher().exists(&self.pattern(pattern))
    }

    /// Occurrences of `a` with some occurrence of `b` within `max_distance`
    pub fn find_near(&self, a: &str, b: &str, max_distance: i64) -> Result<OccurrenceSet> {
        ops::proximity_and(&self.find_all(a), &self.find_all(b), max_distance)
    }

    /// Occurrences of `a` followed by `b` starting at most `max_gap` code
    /// points after `a` ends. A gap of 0 requires `b` to follow immediately.
    pub fn find_followed_by(&self, a: &str, b: &str, max_gap: i64) -> Result<OccurrenceSet> {
        let len_a = self.pattern(a).len();
        ops::ordered_proximity(&self.find_all(a), &self.find_all(b), len_a, max_gap)
    }

    /// Evaluate a grouped query, falling back to the configured default window
    pub fn search_group(
        &self,
        group: &GroupedQuery,
        max_distance: Option<i64>,
    ) -> Result<OccurrenceSet> {
        let max_distance = max_distance
            .unwrap_or_else(|| i64::try_from(self.config.default_max_distance).unwrap_or(i64::MAX));
        group.evaluate(self, max_distance)
    }

    /// Longest substring occurring at least twice, as `(offset, length)`
    pub fn longest_repeat(&self) -> Option<(TextPosition, usize)> {
        let lcp = self.suffix_array.lcp();
        let (slot, &len) = lcp.iter().enumerate().max_by_key(|&(i, &l)| (l, std::cmp::Reverse(i)))?;
        if len == 0 {
            return None;
        }
        let a = self.suffix_array.entries()[slot - 1];
        let b = self.suffix_array.entries()[slot];
        Some((a.min(b), len))
    }

    pub fn stats(&self) -> IndexStats {
        let alphabet_size = self
            .folded
            .as_ref()
            .unwrap_or(&self.corpus)
            .alphabet_size();
        IndexStats::compute(self.len(), alphabet_size, &self.suffix_array)
    }
}
