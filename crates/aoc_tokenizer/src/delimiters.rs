//! Delimiter sets.
//!
//! A delimiter set is a set of `char`s. ASCII members live in a 128-bit
//! mask; non-ASCII members live in a short slice. Searching for the next
//! delimiter picks the cheapest strategy available for the set:
//!
//! | Set                      | Search        |
//! |--------------------------|---------------|
//! | 1 ASCII char             | `memchr`      |
//! | 2 ASCII chars            | `memchr2`     |
//! | 3 ASCII chars            | `memchr3`     |
//! | 4+ ASCII chars           | byte table    |
//! | any non-ASCII char       | `char` scan   |
//!
//! Byte-level search is sound for ASCII-only sets because an ASCII byte
//! never occurs inside a multi-byte UTF-8 sequence, so every match is a
//! character boundary.

use crate::TokenizerError;

/// How [`DelimiterSet::find`] locates the next delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Search {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
    /// Four or more ASCII delimiters, or at least one non-ASCII delimiter.
    Table,
}

/// The set of characters that separate tokens.
///
/// Duplicate characters in the construction string are ignored, so
/// `"\n\n"` and `"\n"` build equal sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterSet {
    /// Bit `b` set when ASCII byte `b` is a delimiter.
    ascii: u128,
    /// Non-ASCII delimiters, deduplicated, in first-seen order.
    wide: Box<[char]>,
    search: Search,
}

impl DelimiterSet {
    /// Build a set from every character in `delimiters`.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::EmptyDelimiters`] when `delimiters` is empty.
    pub fn new(delimiters: &str) -> Result<Self, TokenizerError> {
        if delimiters.is_empty() {
            return Err(TokenizerError::EmptyDelimiters);
        }

        let mut ascii = 0u128;
        let mut ascii_bytes = Vec::new();
        let mut wide = Vec::new();
        for ch in delimiters.chars() {
            match u8::try_from(ch) {
                Ok(byte) if byte.is_ascii() => {
                    let bit = 1u128 << byte;
                    if ascii & bit == 0 {
                        ascii |= bit;
                        ascii_bytes.push(byte);
                    }
                }
                _ => {
                    if !wide.contains(&ch) {
                        wide.push(ch);
                    }
                }
            }
        }

        let search = match (ascii_bytes.as_slice(), wide.is_empty()) {
            ([a], true) => Search::One(*a),
            ([a, b], true) => Search::Two(*a, *b),
            ([a, b, c], true) => Search::Three(*a, *b, *c),
            _ => Search::Table,
        };

        Ok(Self {
            ascii,
            wide: wide.into_boxed_slice(),
            search,
        })
    }

    /// Returns `true` if `ch` is a member of the set.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match u8::try_from(ch) {
            Ok(byte) if byte.is_ascii() => self.contains_ascii(byte),
            _ => self.wide.contains(&ch),
        }
    }

    /// Returns `true` if the set has at least one non-ASCII member.
    pub fn has_non_ascii(&self) -> bool {
        !self.wide.is_empty()
    }

    #[inline]
    fn contains_ascii(&self, byte: u8) -> bool {
        byte.is_ascii() && self.ascii & (1u128 << byte) != 0
    }

    /// Byte offset of the first delimiter in `haystack`, if any.
    ///
    /// The offset is always on a character boundary.
    pub fn find(&self, haystack: &str) -> Option<usize> {
        let bytes = haystack.as_bytes();
        match self.search {
            Search::One(a) => memchr::memchr(a, bytes),
            Search::Two(a, b) => memchr::memchr2(a, b, bytes),
            Search::Three(a, b, c) => memchr::memchr3(a, b, c, bytes),
            Search::Table if self.wide.is_empty() => {
                bytes.iter().position(|&b| self.contains_ascii(b))
            }
            Search::Table => haystack
                .char_indices()
                .find(|&(_, ch)| self.contains(ch))
                .map(|(offset, _)| offset),
        }
    }

    /// Length in bytes of the run of delimiters at the start of `haystack`.
    pub fn leading_run(&self, haystack: &str) -> usize {
        if self.wide.is_empty() {
            haystack
                .as_bytes()
                .iter()
                .take_while(|&&b| self.contains_ascii(b))
                .count()
        } else {
            haystack
                .char_indices()
                .find(|&(_, ch)| !self.contains(ch))
                .map_or(haystack.len(), |(offset, _)| offset)
        }
    }
}
