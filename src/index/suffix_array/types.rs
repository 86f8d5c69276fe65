//! Types for suffix array indexing
//!
//! This module defines the configuration and symbol abstraction used to
//! build suffix arrays over any integer-like alphabet.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Marker for an unfilled suffix array slot during induced sorting
pub(crate) const EMPTY: usize = usize::MAX;

/// Default proximity window for grouped queries
pub const DEFAULT_MAX_DISTANCE: usize = 5;

/// A symbol that can be bucketed by its integer value.
///
/// `index()` must be order-preserving: `a < b` iff `a.index() < b.index()`.
pub trait Symbol: Copy + Ord + Send + Sync {
    fn index(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u16 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u32 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for usize {
    #[inline]
    fn index(self) -> usize {
        self
    }
}

impl Symbol for char {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Construction strategy for the suffix array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildAlgorithm {
    /// Comparison sort below `comparison_threshold`, induced sorting above
    #[default]
    Auto,
    /// Linear-time SA-IS
    InducedSorting,
    /// O(n log n) comparison sort of suffix slices
    Comparison,
}

/// Configuration for index building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Construction strategy (default: auto)
    pub algorithm: BuildAlgorithm,
    /// Corpora shorter than this use the comparison sort under `Auto` (default: 64)
    pub comparison_threshold: usize,
    /// Fold corpus and patterns to lowercase before indexing (default: false)
    pub case_insensitive: bool,
    /// Proximity window used when a grouped query gives none (default: 5)
    pub default_max_distance: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            algorithm: BuildAlgorithm::Auto,
            comparison_threshold: 64,
            case_insensitive: false,
            default_max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl IndexConfig {
    /// Parse a JSON configuration document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve `Auto` for a corpus of length `n`
    pub fn algorithm_for(&self, n: usize) -> BuildAlgorithm {
        match self.algorithm {
            BuildAlgorithm::Auto if n < self.comparison_threshold => BuildAlgorithm::Comparison,
            BuildAlgorithm::Auto => BuildAlgorithm::InducedSorting,
            fixed => fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.algorithm, BuildAlgorithm::Auto);
        assert_eq!(config.default_max_distance, 5);
        assert!(!config.case_insensitive);
    }

    #[test]
    fn test_from_json_partial() {
        let config = IndexConfig::from_json(r#"{"case_insensitive": true}"#).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.comparison_threshold, 64);

        let config = IndexConfig::from_json(r#"{"algorithm": "induced_sorting"}"#).unwrap();
        assert_eq!(config.algorithm, BuildAlgorithm::InducedSorting);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = IndexConfig::from_json(r#"{"algorithm": "bogus"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = IndexConfig {
            case_insensitive: true,
            default_max_distance: 12,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(IndexConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_algorithm_for() {
        let config = IndexConfig::default();
        assert_eq!(config.algorithm_for(10), BuildAlgorithm::Comparison);
        assert_eq!(config.algorithm_for(1000), BuildAlgorithm::InducedSorting);

        let fixed = IndexConfig {
            algorithm: BuildAlgorithm::InducedSorting,
            ..Default::default()
        };
        assert_eq!(fixed.algorithm_for(3), BuildAlgorithm::InducedSorting);
    }

    #[test]
    fn test_symbol_index_preserves_order() {
        assert!('a'.index() < 'b'.index());
        assert!('z'.index() < '罗'.index());
        assert_eq!(7u8.index(), 7);
    }
}
