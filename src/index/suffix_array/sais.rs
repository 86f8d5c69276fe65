//! SA-IS: linear-time suffix array construction by induced sorting
//!
//! Reference: Nong, Zhang & Chan (2009), "Linear Suffix Array Construction
//! by Almost Pure Induced-Sorting".
//!
//! No terminator is stored in the text. A virtual terminator that is smaller
//! than every symbol sits just past the end; it is the final S-type position,
//! so the last real symbol is always L-type and is induced first.

use super::types::{EMPTY, Symbol};

/// Build the suffix array of `text`, whose symbols all have `index() < alphabet_size`.
pub(crate) fn induced_sort<T: Symbol>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    induced_sort_at(text, alphabet_size, 0)
}

fn induced_sort_at<T: Symbol>(text: &[T], alphabet_size: usize, depth: usize) -> Vec<usize> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => return if text[0] < text[1] { vec![0, 1] } else { vec![1, 0] },
        _ => {}
    }

    let stype = classify(text);
    let buckets = Buckets::new(text, alphabet_size);
    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(&stype, i)).collect();

    let mut sa = vec![EMPTY; n];
    induce(text, &stype, &buckets, &lms, &mut sa);

    if lms.is_empty() {
        return sa;
    }

    // Order the LMS positions by their LMS substrings, then name them
    let mut lms_rank = vec![EMPTY; n];
    for (rank, &p) in lms.iter().enumerate() {
        lms_rank[p] = rank;
    }
    let mut sorted_lms: Vec<usize> = sa
        .iter()
        .copied()
        .filter(|&p| p != EMPTY && lms_rank[p] != EMPTY)
        .collect();

    let m = lms.len();
    let end_of = |p: usize| lms.get(lms_rank[p] + 1).copied().unwrap_or(n);

    let mut reduced = vec![0usize; m];
    let mut name = 0usize;
    reduced[lms_rank[sorted_lms[0]]] = 0;
    for pair in sorted_lms.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if !same_lms_substring(text, prev, end_of(prev), cur, end_of(cur)) {
            name += 1;
        }
        reduced[lms_rank[cur]] = name;
    }
    let names = name + 1;

    log::trace!(
        "sa-is depth {}: n={}, lms={}, distinct names={}",
        depth,
        n,
        m,
        names
    );

    if names < m {
        // Names collide: sort the reduced string to get the true LMS order
        let reduced_sa = induced_sort_at(&reduced, names, depth + 1);
        for (slot, &r) in sorted_lms.iter_mut().zip(&reduced_sa) {
            *slot = lms[r];
        }
    }

    induce(text, &stype, &buckets, &sorted_lms, &mut sa);
    sa
}

/// `stype[i]` is true when suffix `i` is S-type (smaller than suffix `i + 1`)
fn classify<T: Symbol>(text: &[T]) -> Vec<bool> {
    let n = text.len();
    let mut stype = vec![false; n];
    for i in (0..n - 1).rev() {
        stype[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => stype[i + 1],
        };
    }
    stype
}

#[inline]
fn is_lms(stype: &[bool], i: usize) -> bool {
    i > 0 && stype[i] && !stype[i - 1]
}

/// Two LMS substrings are equal when they have the same length and symbols.
/// A substring that runs into the virtual terminator is unique.
fn same_lms_substring<T: Symbol>(
    text: &[T],
    a: usize,
    a_end: usize,
    b: usize,
    b_end: usize,
) -> bool {
    let n = text.len();
    a_end < n && b_end < n && a_end - a == b_end - b && text[a..=a_end] == text[b..=b_end]
}

/// Bucket boundaries: bucket `c` spans `starts[c]..starts[c + 1]`
struct Buckets {
    starts: Vec<usize>,
}

impl Buckets {
    fn new<T: Symbol>(text: &[T], alphabet_size: usize) -> Self {
        let mut starts = vec![0usize; alphabet_size + 1];
        for &c in text {
            starts[c.index() + 1] += 1;
        }
        for c in 0..alphabet_size {
            starts[c + 1] += starts[c];
        }
        Self { starts }
    }

    fn heads(&self) -> Vec<usize> {
        self.starts[..self.starts.len() - 1].to_vec()
    }

    fn tails(&self) -> Vec<usize> {
        self.starts[1..].to_vec()
    }
}

/// Seed the LMS positions at bucket tails (keeping their given order), then
/// induce L-type suffixes left to right and S-type suffixes right to left.
fn induce<T: Symbol>(
    text: &[T],
    stype: &[bool],
    buckets: &Buckets,
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();
    sa.fill(EMPTY);

    let mut tails = buckets.tails();
    for &p in lms.iter().rev() {
        let c = text[p].index();
        tails[c] -= 1;
        sa[tails[c]] = p;
    }

    let mut heads = buckets.heads();
    let last = text[n - 1].index();
    sa[heads[last]] = n - 1;
    heads[last] += 1;
    for i in 0..n {
        let v = sa[i];
        if v != EMPTY && v > 0 && !stype[v - 1] {
            let c = text[v - 1].index();
            sa[heads[c]] = v - 1;
            heads[c] += 1;
        }
    }

    let mut tails = buckets.tails();
    for i in (0..n).rev() {
        let v = sa[i];
        if v != EMPTY && v > 0 && stype[v - 1] {
            let c = text[v - 1].index();
            tails[c] -= 1;
            sa[tails[c]] = v - 1;
        }
    }
}
