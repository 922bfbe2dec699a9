//! Resettable token stream over an owned copy of the input.
//!
//! # State
//!
//! ```text
//! source     "Hello\n\nWorld\n"     owned, never mutated
//! pos              ^                next scan starts here
//! total      2                      fixed at construction
//! remaining  1                      total minus tokens handed out
//! ```
//!
//! Nothing is split in place: a token is a slice of `source`, so a reset
//! only has to rewind `pos` and restore `remaining`. The replayed stream is
//! identical to the first one because `source` and the delimiter set are
//! both immutable after construction.
//!
//! # Ownership
//!
//! [`next_token`](Tokenizer::next_token) borrows the tokenizer mutably for
//! as long as the returned `&str` lives, so a token can never outlive the
//! next extraction or a reset. Use the [`Iterator`] impl for owned copies.

use std::iter::FusedIterator;

use crate::{Cursor, DelimiterSet, TokenizerError};

/// Number of tokens `text` yields under `delimiters`.
///
/// Runs the same scan as [`Tokenizer::next_token`] over a throwaway
/// cursor, so the count agrees with extraction by construction.
pub fn count_tokens(text: &str, delimiters: &DelimiterSet) -> usize {
    let mut cursor = Cursor::new(text);
    let mut count = 0;
    while cursor.eat_token(delimiters).is_some() {
        count += 1;
    }
    count
}

/// `strtok`-style tokenizer with reset and an O(1) remaining count.
///
/// # Example
///
/// ```
/// use aoc_tokenizer::Tokenizer;
///
/// let mut tok = Tokenizer::new("+1\n\n-2\n+3\n", "\n")?;
/// assert_eq!(tok.remaining(), 3);
/// assert_eq!(tok.next_token(), Some("+1"));
/// assert_eq!(tok.remaining(), 2);
///
/// tok.reset();
/// let all: Vec<String> = tok.by_ref().collect();
/// assert_eq!(all, ["+1", "-2", "+3"]);
/// assert_eq!(tok.next_token(), None);
/// # Ok::<(), aoc_tokenizer::TokenizerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer {
    source: Box<str>,
    delimiters: DelimiterSet,
    /// Byte offset where the next scan begins.
    pos: usize,
    /// Token count of the whole source, computed once.
    total: usize,
    /// Tokens not yet handed out. Always `<= total`.
    remaining: usize,
}

impl Tokenizer {
    /// Create a tokenizer over a copy of `text`, split on any character
    /// of `delimiters`.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::EmptyText`] when `text` is empty.
    /// - [`TokenizerError::EmptyDelimiters`] when `delimiters` is empty.
    ///
    /// Text made only of delimiters is accepted and yields no tokens.
    pub fn new(text: &str, delimiters: &str) -> Result<Self, TokenizerError> {
        if text.is_empty() {
            return Err(TokenizerError::EmptyText);
        }
        Self::with_delimiters(text, DelimiterSet::new(delimiters)?)
    }

    /// Create a tokenizer from a pre-built delimiter set.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::EmptyText`] when `text` is empty.
    pub fn with_delimiters(text: &str, delimiters: DelimiterSet) -> Result<Self, TokenizerError> {
        if text.is_empty() {
            return Err(TokenizerError::EmptyText);
        }
        let total = count_tokens(text, &delimiters);
        Ok(Self {
            source: Box::from(text),
            delimiters,
            pos: 0,
            total,
            remaining: total,
        })
    }

    /// Extract the next token, or `None` once the stream is exhausted.
    ///
    /// Exhaustion is sticky: further calls keep returning `None` until
    /// [`reset`](Self::reset).
    pub fn next_token(&mut self) -> Option<&str> {
        let mut cursor = Cursor::at(&self.source, self.pos);
        let token = cursor.eat_token(&self.delimiters);
        self.pos = cursor.pos();
        if token.is_some() {
            debug_assert!(self.remaining > 0, "remaining count out of sync with source");
            self.remaining = self.remaining.saturating_sub(1);
        } else {
            debug_assert_eq!(self.remaining, 0, "stream ended with tokens outstanding");
        }
        token
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&str> {
        Cursor::at(&self.source, self.pos).eat_token(&self.delimiters)
    }

    /// Rewind to the first token and restore the original count.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.remaining = self.total;
    }

    /// Tokens left before exhaustion. O(1).
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Tokens the whole source yields, regardless of progress.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` when no tokens remain.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// The tokenizer's own copy of the input text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The delimiter set tokens are split on.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }
}

/// Owned-token view of the stream. Shares state with
/// [`next_token`](Tokenizer::next_token).
impl Iterator for Tokenizer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token().map(str::to_owned)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Tokenizer {}

impl FusedIterator for Tokenizer {}
