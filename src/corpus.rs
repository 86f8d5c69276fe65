//! Immutable text corpus
//!
//! A [`Corpus`] is a fully decoded sequence of code points. Decoding from
//! bytes goes through an injected [`Decoder`] so no process-wide locale state
//! is ever consulted.

use crate::error::{Error, Result};

/// Immutable sequence of code points that an index is built over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    chars: Vec<char>,
}

impl Corpus {
    /// Create a corpus from a string slice
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Create a corpus from already decoded code points
    pub fn from_chars(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Decode raw bytes into a corpus with the supplied decoder
    pub fn decode<D: Decoder + ?Sized>(bytes: &[u8], decoder: &D) -> Result<Self> {
        Ok(Self {
            chars: decoder.decode(bytes)?,
        })
    }

    /// Apply simple lowercase folding to every code point.
    ///
    /// Folding is one-to-one, so offsets into the folded corpus are offsets
    /// into the original one.
    pub fn folded(&self) -> Self {
        Self {
            chars: self.chars.iter().map(|&c| fold_char(c)).collect(),
        }
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Largest code point value plus one (0 for an empty corpus)
    pub fn alphabet_size(&self) -> usize {
        self.chars
            .iter()
            .map(|&c| c as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Text of `len` code points starting at `offset`, clamped to the corpus
    pub fn slice(&self, offset: usize, len: usize) -> String {
        let start = offset.min(self.chars.len());
        let end = offset.saturating_add(len).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }
}

impl From<&str> for Corpus {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Corpus {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

/// Lowercase a single code point when the mapping is one-to-one.
///
/// Characters whose lowercase form expands to several code points are left
/// unchanged so that lengths are preserved.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Converts raw bytes into code points at the corpus boundary.
pub trait Decoder {
    /// Short name used in error messages
    fn name(&self) -> &'static str;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>>;
}

/// Strict UTF-8: fails at the first invalid byte
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Decoder for Utf8 {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.chars().collect()),
            Err(e) => Err(Error::Decode {
                encoding: self.name(),
                offset: e.valid_up_to(),
            }),
        }
    }
}

/// UTF-8 with invalid sequences replaced by U+FFFD
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Lossy;

impl Decoder for Utf8Lossy {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>> {
        Ok(String::from_utf8_lossy(bytes).chars().collect())
    }
}

/// ISO-8859-1: every byte maps to the code point of the same value
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Decoder for Latin1 {
    fn name(&self) -> &'static str {
        "latin-1"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>> {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

impl<F> Decoder for F
where
    F: Fn(&[u8]) -> Result<Vec<char>>,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>> {
        self(bytes)
    }
}
