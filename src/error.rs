use thiserror::Error;

/// Errors surfaced by the index and query layers.
///
/// Most operations never fail: empty patterns, empty corpora and malformed
/// query text all produce empty results instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: maximum distance must be non-negative, got {0}")]
    NegativeDistance(i64),

    #[error("invalid {encoding} input at byte {offset}")]
    Decode {
        encoding: &'static str,
        offset: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for saphrase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validate a caller-supplied proximity window.
pub(crate) fn check_distance(max_distance: i64) -> Result<usize> {
    if max_distance < 0 {
        return Err(Error::NegativeDistance(max_distance));
    }
    Ok(usize::try_from(max_distance).unwrap_or(usize::MAX))
}
