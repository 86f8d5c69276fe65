//! Result-set algebra
//!
//! Every operator takes sorted, duplicate-free occurrence sets and produces
//! one by a single linear merge. Nothing here re-sorts.

use crate::error::{Result, check_distance};
use crate::index::types::{OccurrenceSet, TextPosition};
use std::cmp::Ordering;

/// Offsets present in both `a` and `b`
pub fn intersect(a: &OccurrenceSet, b: &OccurrenceSet) -> OccurrenceSet {
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    OccurrenceSet::from_sorted(out)
}

/// Offsets present in `a` or `b`
pub fn union(a: &OccurrenceSet, b: &OccurrenceSet) -> OccurrenceSet {
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    OccurrenceSet::from_sorted(out)
}

/// Offsets in `a` that are not in `b`.
///
/// This is a binary difference; there is no complement against the corpus.
pub fn difference(a: &OccurrenceSet, b: &OccurrenceSet) -> OccurrenceSet {
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut out = Vec::with_capacity(a.len());
    let mut j = 0;
    for &x in a {
        while j < b.len() && b[j] < x {
            j += 1;
        }
        if j >= b.len() || b[j] != x {
            out.push(x);
        }
    }
    OccurrenceSet::from_sorted(out)
}

/// Offsets `x` in `a` with some `y` in `b` where `|x - y| <= max_distance`
pub fn proximity_and(
    a: &OccurrenceSet,
    b: &OccurrenceSet,
    max_distance: i64,
) -> Result<OccurrenceSet> {
    let d = check_distance(max_distance)?;
    let b = b.as_slice();
    let mut out = Vec::new();
    let mut lo = 0;
    for &x in a {
        // b[lo] is the first candidate not left of the window around x
        while lo < b.len() && b[lo].saturating_add(d) < x {
            lo += 1;
        }
        if lo < b.len() && b[lo] <= x.saturating_add(d) {
            out.push(x);
        }
    }
    Ok(OccurrenceSet::from_sorted(out))
}

/// Offsets `x` in `a` followed by some `y` in `b` with
/// `x + len_a <= y <= x + len_a + max_distance`.
///
/// With `max_distance == 0` this is ordered adjacency.
pub fn ordered_proximity(
    a: &OccurrenceSet,
    b: &OccurrenceSet,
    len_a: usize,
    max_distance: i64,
) -> Result<OccurrenceSet> {
    let d = check_distance(max_distance)?;
    let b = b.as_slice();
    let mut out = Vec::new();
    let mut lo = 0;
    for &x in a {
        let end = x.saturating_add(len_a);
        while lo < b.len() && b[lo] < end {
            lo += 1;
        }
        if lo < b.len() && b[lo] <= end.saturating_add(d) {
            out.push(x);
        }
    }
    Ok(OccurrenceSet::from_sorted(out))
}

/// Intersection of every set; empty input gives an empty set
pub fn intersect_all(sets: &[OccurrenceSet]) -> OccurrenceSet {
    let Some((first, rest)) = sets.split_first() else {
        return OccurrenceSet::new();
    };
    rest.iter().fold(first.clone(), |acc, s| intersect(&acc, s))
}

/// Union of every set; empty input gives an empty set
pub fn union_all(sets: &[OccurrenceSet]) -> OccurrenceSet {
    sets.iter().fold(OccurrenceSet::new(), |acc, s| union(&acc, s))
}

/// Distance-aware AND fold.
///
/// Folds left to right. At each step a running offset `p` and a candidate
/// `q` from the next set merge into `min(p, q)` when `|p - q| <= max_distance`;
/// unmatched offsets are dropped. The fold is not symmetric for three or more
/// sets: the running offset stands in for every earlier term.
pub fn fold_within_all(sets: &[OccurrenceSet], max_distance: i64) -> Result<OccurrenceSet> {
    fold_within(sets, max_distance, false)
}

/// Distance-aware OR fold: like [`fold_within_all`] but unmatched offsets
/// from either side are kept.
pub fn fold_within_any(sets: &[OccurrenceSet], max_distance: i64) -> Result<OccurrenceSet> {
    fold_within(sets, max_distance, true)
}

fn fold_within(
    sets: &[OccurrenceSet],
    max_distance: i64,
    keep_unmatched: bool,
) -> Result<OccurrenceSet> {
    let d = check_distance(max_distance)?;
    let Some((first, rest)) = sets.split_first() else {
        return Ok(OccurrenceSet::new());
    };
    let folded = rest.iter().fold(first.clone(), |acc, next| {
        merge_within(acc.as_slice(), next.as_slice(), d, keep_unmatched)
    });
    Ok(folded)
}

/// One step of the distance-aware fold.
///
/// Each emitted value is the smaller of the two current heads, and at least
/// that head is consumed, so the output stays strictly increasing.
fn merge_within(
    acc: &[TextPosition],
    next: &[TextPosition],
    d: usize,
    keep_unmatched: bool,
) -> OccurrenceSet {
    let mut out = Vec::with_capacity(if keep_unmatched {
        acc.len() + next.len()
    } else {
        acc.len().min(next.len())
    });
    let (mut i, mut j) = (0, 0);
    while i < acc.len() && j < next.len() {
        let (p, q) = (acc[i], next[j]);
        if p.abs_diff(q) <= d {
            out.push(p.min(q));
            i += 1;
            j += 1;
        } else if p < q {
            if keep_unmatched {
                out.push(p);
            }
            i += 1;
        } else {
            if keep_unmatched {
                out.push(q);
            }
            j += 1;
        }
    }
    if keep_unmatched {
        out.extend_from_slice(&acc[i..]);
        out.extend_from_slice(&next[j..]);
    }
    OccurrenceSet::from_sorted(out)
}
