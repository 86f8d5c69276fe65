//! Shared index types

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Deref, Sub};

/// Offset into a corpus, counted in code points
pub type TextPosition = usize;

/// Strictly increasing set of corpus offsets.
///
/// Every algebra operator relies on this ordering for its linear merges, so
/// the only ways to build a set either sort and deduplicate the input or come
/// from an operator that preserves the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<TextPosition>", into = "Vec<TextPosition>")]
pub struct OccurrenceSet {
    offsets: Vec<TextPosition>,
}

impl OccurrenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from offsets in any order, dropping duplicates
    pub fn from_unsorted(mut offsets: Vec<TextPosition>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// Wrap offsets produced by a merge that already keeps them strictly increasing
    pub(crate) fn from_sorted(offsets: Vec<TextPosition>) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        Self { offsets }
    }

    #[inline]
    pub fn as_slice(&self) -> &[TextPosition] {
        &self.offsets
    }

    pub fn into_vec(self) -> Vec<TextPosition> {
        self.offsets
    }

    /// Membership test by binary search
    pub fn contains(&self, offset: TextPosition) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }
}

impl Deref for OccurrenceSet {
    type Target = [TextPosition];

    fn deref(&self) -> &[TextPosition] {
        &self.offsets
    }
}

impl From<Vec<TextPosition>> for OccurrenceSet {
    fn from(offsets: Vec<TextPosition>) -> Self {
        Self::from_unsorted(offsets)
    }
}

impl From<OccurrenceSet> for Vec<TextPosition> {
    fn from(set: OccurrenceSet) -> Self {
        set.offsets
    }
}

impl<const N: usize> From<[TextPosition; N]> for OccurrenceSet {
    fn from(offsets: [TextPosition; N]) -> Self {
        Self::from_unsorted(offsets.to_vec())
    }
}

impl FromIterator<TextPosition> for OccurrenceSet {
    fn from_iter<I: IntoIterator<Item = TextPosition>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl IntoIterator for OccurrenceSet {
    type Item = TextPosition;
    type IntoIter = std::vec::IntoIter<TextPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.into_iter()
    }
}

impl<'a> IntoIterator for &'a OccurrenceSet {
    type Item = &'a TextPosition;
    type IntoIter = std::slice::Iter<'a, TextPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

impl PartialEq<[TextPosition]> for OccurrenceSet {
    fn eq(&self, other: &[TextPosition]) -> bool {
        self.offsets == other
    }
}

impl<const N: usize> PartialEq<[TextPosition; N]> for OccurrenceSet {
    fn eq(&self, other: &[TextPosition; N]) -> bool {
        self.offsets == other
    }
}

impl BitAnd for &OccurrenceSet {
    type Output = OccurrenceSet;

    fn bitand(self, rhs: &OccurrenceSet) -> OccurrenceSet {
        crate::query::ops::intersect(self, rhs)
    }
}

impl BitOr for &OccurrenceSet {
    type Output = OccurrenceSet;

    fn bitor(self, rhs: &OccurrenceSet) -> OccurrenceSet {
        crate::query::ops::union(self, rhs)
    }
}

impl Sub for &OccurrenceSet {
    type Output = OccurrenceSet;

    fn sub(self, rhs: &OccurrenceSet) -> OccurrenceSet {
        crate::query::ops::difference(self, rhs)
    }
}
