use crate::index::suffix_array::SuffixArray;
use serde::Serialize;
use std::fmt;

/// Summary of a built index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Corpus length in code points
    pub corpus_len: usize,
    /// Largest code point value plus one
    pub alphabet_size: usize,
    /// Length of the longest substring that occurs at least twice
    pub max_lcp: usize,
    /// Number of distinct non-empty substrings
    pub distinct_substrings: u128,
    /// Approximate heap size of the suffix, LCP and rank arrays in bytes
    pub index_bytes: usize,
}

impl IndexStats {
    pub(crate) fn compute(corpus_len: usize, alphabet_size: usize, sa: &SuffixArray) -> Self {
        let n = corpus_len as u128;
        let shared: u128 = sa.lcp().iter().map(|&l| l as u128).sum();
        Self {
            corpus_len,
            alphabet_size,
            max_lcp: sa.lcp().iter().copied().max().unwrap_or(0),
            distinct_substrings: n * (n + 1) / 2 - shared,
            index_bytes: 3 * sa.len() * std::mem::size_of::<usize>(),
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index Statistics")?;
        writeln!(f, "================")?;
        writeln!(f, "Corpus length:        {}", self.corpus_len)?;
        writeln!(f, "Alphabet size:        {}", self.alphabet_size)?;
        writeln!(f, "Longest repeat:       {}", self.max_lcp)?;
        writeln!(f, "Distinct substrings:  {}", self.distinct_substrings)?;
        write!(f, "Index size:           {}", format_size(self.index_bytes))
    }
}

/// Render a byte count with the largest binary unit that keeps it >= 1
fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }
    let mut scaled = bytes as f64 / 1024.0;
    let mut unit = 0;
    while scaled >= 1024.0 && unit + 1 < UNITS.len() {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", scaled, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::SuffixArrayBuilder;

    #[test]
    fn test_banana_stats() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"banana");
        let stats = IndexStats::compute(6, 256, &sa);
        assert_eq!(stats.max_lcp, 3);
        // 21 substrings by position, 6 shared prefixes: 15 distinct
        assert_eq!(stats.distinct_substrings, 15);
    }

    #[test]
    fn test_empty_stats() {
        let stats = IndexStats::compute(0, 0, &SuffixArray::default());
        assert_eq!(stats.max_lcp, 0);
        assert_eq!(stats.distinct_substrings, 0);
        assert_eq!(stats.index_bytes, 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_size(3 << 30), "3.00 GB");
    }

    #[test]
    fn test_display() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"aaaa");
        let text = IndexStats::compute(4, 98, &sa).to_string();
        assert!(text.starts_with("Index Statistics"));
        assert!(text.contains("Longest repeat:       3"));
    }
}
