//! Grouped proximity queries
//!
//! A [`GroupedQuery`] is a list of words under a single operator. The
//! operator is fixed when the group is created from its first two words;
//! later words can only be appended.

use crate::error::Result;
use crate::index::TextIndex;
use crate::index::types::OccurrenceSet;
use crate::query::ops::{fold_within_all, fold_within_any};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Operator shared by every word of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOp {
    /// All words must occur together within the window
    And,
    /// Any word may occur; nearby occurrences collapse into one
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedQuery {
    op: GroupOp,
    words: Vec<String>,
}

impl GroupedQuery {
    /// Start an AND group from two words
    pub fn and(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            op: GroupOp::And,
            words: vec![first.into(), second.into()],
        }
    }

    /// Start an OR group from two words
    pub fn or(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            op: GroupOp::Or,
            words: vec![first.into(), second.into()],
        }
    }

    /// Build a group from an arbitrary word list. An empty list evaluates
    /// to an empty result.
    pub fn from_words<I, S>(op: GroupOp, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            op,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a word under the group's operator
    pub fn push(&mut self, word: impl Into<String>) -> &mut Self {
        self.words.push(word.into());
        self
    }

    /// Append a word, by value
    pub fn with(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    pub fn op(&self) -> GroupOp {
        self.op
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Match every word and fold the occurrence sets left to right with the
    /// distance-aware merge of the group's operator.
    pub fn evaluate(&self, index: &TextIndex, max_distance: i64) -> Result<OccurrenceSet> {
        let sets = self.match_words(index);
        for (word, set) in self.words.iter().zip(&sets) {
            log::trace!("group word {:?}: {} occurrences", word, set.len());
        }

        let result = match self.op {
            GroupOp::And => fold_within_all(&sets, max_distance)?,
            GroupOp::Or => fold_within_any(&sets, max_distance)?,
        };
        log::debug!(
            "evaluated {} ({} words, window {}): {} results",
            self,
            self.words.len(),
            max_distance,
            result.len()
        );
        Ok(result)
    }

    #[cfg(not(feature = "parallel"))]
    fn match_words(&self, index: &TextIndex) -> Vec<OccurrenceSet> {
        self.words.iter().map(|w| index.find_all(w)).collect()
    }

    #[cfg(feature = "parallel")]
    fn match_words(&self, index: &TextIndex) -> Vec<OccurrenceSet> {
        self.words.par_iter().map(|w| index.find_all(w)).collect()
    }
}

impl fmt::Display for GroupedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.op {
            GroupOp::And => " _AND_ ",
            GroupOp::Or => " _OR_ ",
        };
        write!(f, "{}", self.words.join(sep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_builder_fixes_operator() {
        let mut group = GroupedQuery::and("romeo", "juliet");
        group.push("verona").push("night");
        assert_eq!(group.op(), GroupOp::And);
        assert_eq!(group.words(), &["romeo", "juliet", "verona", "night"]);

        let group = GroupedQuery::or("a", "b").with("c");
        assert_eq!(group.op(), GroupOp::Or);
        assert_eq!(group.words().len(), 3);
    }

    #[test]
    fn test_display() {
        let group = GroupedQuery::and("x", "y").with("z");
        assert_eq!(group.to_string(), "x _AND_ y _AND_ z");
        assert_eq!(GroupedQuery::or("x", "y").to_string(), "x _OR_ y");
    }

    #[test]
    fn test_and_group_within_window() {
        // w1 at 5, w2 at 10
        let index = TextIndex::new("-----AAAA-BBBB---------------");
        let group = GroupedQuery::and("AAAA", "BBBB");
        assert_eq!(index.search_group(&group, Some(7)).unwrap(), [5]);
        assert!(index.search_group(&group, Some(4)).unwrap().is_empty());
    }

    #[test]
    fn test_and_group_too_far() {
        // w1 at 5, w2 only at 20
        let index = TextIndex::new("-----AAAA-----------BBBB-----");
        let group = GroupedQuery::and("AAAA", "BBBB");
        assert!(index.search_group(&group, Some(7)).unwrap().is_empty());
    }

    #[test]
    fn test_or_group_keeps_lone_words() {
        let index = TextIndex::new("-----AAAA-----------BBBB-----");
        let group = GroupedQuery::or("AAAA", "BBBB");
        assert_eq!(index.search_group(&group, Some(7)).unwrap(), [5, 20]);
        assert_eq!(index.search_group(&group, Some(20)).unwrap(), [5]);
    }

    #[test]
    fn test_default_window_is_five() {
        let index = TextIndex::new("ab...cd....ab......cd");
        // ab at 0 and 11, cd at 5 and 19
        let group = GroupedQuery::and("ab", "cd");
        assert_eq!(index.search_group(&group, None).unwrap(), [0]);
    }

    #[test]
    fn test_three_word_group() {
        let index = TextIndex::new("one two three ... one ... ... ... two three");
        let group = GroupedQuery::and("one", "two").with("three");
        assert_eq!(index.search_group(&group, Some(8)).unwrap(), [0]);
    }

    #[test]
    fn test_empty_group_and_missing_word() {
        let index = TextIndex::new("banana");
        let empty = GroupedQuery::from_words(GroupOp::And, Vec::<String>::new());
        assert!(index.search_group(&empty, Some(3)).unwrap().is_empty());

        let group = GroupedQuery::and("ban", "zzz");
        assert!(index.search_group(&group, Some(3)).unwrap().is_empty());

        let group = GroupedQuery::or("ban", "zzz");
        assert_eq!(index.search_group(&group, Some(3)).unwrap(), [0]);
    }

    #[test]
    fn test_negative_window() {
        let index = TextIndex::new("banana");
        let group = GroupedQuery::and("b", "n");
        assert_eq!(
            index.search_group(&group, Some(-1)),
            Err(Error::NegativeDistance(-1))
        );
    }

    #[test]
    fn test_serde() {
        let group = GroupedQuery::or("a", "b");
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"{"op":"or","words":["a","b"]}"#);
    }
}
