//! Longest-common-prefix array (Kasai et al.)

/// Inverse permutation of a suffix array: `rank[sa[i]] == i`
pub(crate) fn inverse(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0usize; sa.len()];
    for (i, &p) in sa.iter().enumerate() {
        rank[p] = i;
    }
    rank
}

/// Compute `lcp[i] = |lcp(suffix(sa[i - 1]), suffix(sa[i]))|`, with `lcp[0] = 0`.
///
/// Positions are visited in text order so the running match length drops by
/// at most one between steps, giving O(n) total comparisons.
pub(crate) fn kasai<T: PartialEq>(text: &[T], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];
    let mut h = 0usize;

    for i in 0..n {
        let r = rank[i];
        if r == 0 {
            h = 0;
            continue;
        }
        let j = sa[r - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[r] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
